// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! HTML gallery assembly
//!
//! Produces one self-contained page: run counts, an optional `README.md`
//! rendered as Markdown, and a sortable table with one row per catalog
//! entry. Failed entries keep their row so a broken file is visible in the
//! catalog rather than silently missing.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::index::{EntryStatus, IndexConfig, IndexEntry, IndexSummary};

const PASS_ICON: &str = "&#9989;";
const FLAG_ICON: &str = "&#10060;";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }\
table { border-collapse: collapse; width: 100%; }\
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\
th { background-color: #f2f2f2; cursor: pointer; }\
img { max-width: 100%; height: auto; }\
#readme { background-color: #f9f9f9; border: 1px solid #eee; padding: 1em; margin-bottom: 2em; }\
.font-name-col, .filename-col { max-width: 150px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }\
.render-col { width: auto; }";

const SORT_SCRIPT: &str = r#"
<script>
const sortDirections = {};

function sortTable(n) {
    const table = document.getElementById("fontTable");
    const tbody = table.tBodies[0];
    const rows = Array.from(tbody.rows);

    const dir = sortDirections[n] === 'asc' ? 'desc' : 'asc';
    sortDirections[n] = dir;

    rows.sort((a, b) => {
        const x = a.cells[n].innerText.toLowerCase();
        const y = b.cells[n].innerText.toLowerCase();
        if (x < y) { return dir === 'asc' ? -1 : 1; }
        if (x > y) { return dir === 'asc' ? 1 : -1; }
        return 0;
    });

    rows.forEach(row => tbody.appendChild(row));
}
</script>
"#;

/// Escape text for use in HTML content or attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Assemble the gallery page
pub fn gallery(config: &IndexConfig, entries: &[IndexEntry], summary: &IndexSummary) -> String {
    let mut page = String::new();
    let issues = summary.flagged + summary.failed;

    page.push_str("<html><head><title>Font Index</title>");
    let _ = write!(page, "<style>{STYLE}</style>");
    page.push_str("</head><body>");
    page.push_str("<h1>Font Index</h1>");
    let _ = write!(
        page,
        "<p>Total fonts processed: {}</p><p>Fonts with quality issues ({FLAG_ICON}): {issues}</p>",
        summary.total
    );

    if let Some(readme) = readme_html(Path::new("README.md")) {
        let _ = write!(page, "<div id=\"readme\">{readme}</div>");
    }

    let _ = write!(
        page,
        "<p>The <b>Quality</b> column indicates whether a font has passed a series of quality \
         checks. A green checkmark ({PASS_ICON}) indicates that the font has passed all checks. \
         A red 'x' ({FLAG_ICON}) indicates that the font may have issues, such as missing \
         characters or inconsistent kerning, which can cause problems when rendering text.</p>"
    );
    let _ = write!(page, "<p>Rendering the text: \"{}\"</p>", escape(&config.text));

    page.push_str("<table id=\"fontTable\">");
    page.push_str(
        "<thead><tr>\
         <th class=\"font-name-col\" onclick=\"sortTable(0)\">Font Name</th>\
         <th class=\"filename-col\" onclick=\"sortTable(1)\">Filename</th>\
         <th onclick=\"sortTable(2)\">Style</th>\
         <th onclick=\"sortTable(3)\">Quality</th>\
         <th class=\"render-col\">Render</th>\
         <th></th></tr></thead>",
    );
    page.push_str("<tbody>");
    for entry in entries {
        page.push_str(&row(entry));
    }
    page.push_str("</tbody></table>");
    page.push_str(SORT_SCRIPT);
    page.push_str("</body></html>");
    page
}

fn row(entry: &IndexEntry) -> String {
    let filename = entry
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let full_name = entry.names.full_name.as_deref().unwrap_or("N/A");
    let style = entry.names.style.as_deref().unwrap_or("N/A");

    let quality = match entry.quality.reason() {
        None => PASS_ICON.to_string(),
        Some(reason) => format!("<span title=\"{}\">{FLAG_ICON}</span>", escape(reason)),
    };
    let render = match &entry.status {
        EntryStatus::Rendered { image } => format!(
            "<img src=\"{}\" alt=\"Render of {}\">",
            escape(&image.to_string_lossy()),
            escape(full_name)
        ),
        EntryStatus::Failed { reason } => format!("<i>{}</i>", escape(reason)),
    };

    format!(
        "<tr>\
         <td class=\"font-name-col\">{}</td>\
         <td class=\"filename-col\">{}</td>\
         <td>{}</td>\
         <td>{quality}</td>\
         <td class=\"render-col\">{render}</td>\
         <td><a href=\"{}\">download</a></td>\
         </tr>",
        escape(full_name),
        escape(&filename),
        escape(style),
        escape(&entry.path.to_string_lossy()),
    )
}

/// Render `README.md` to HTML, if present
fn readme_html(path: &Path) -> Option<String> {
    let markdown = fs::read_to_string(path).ok()?;
    let parser = pulldown_cmark::Parser::new(&markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::NameInfo;
    use crate::quality::Quality;
    use std::path::PathBuf;

    fn test_config() -> IndexConfig {
        IndexConfig {
            font_dir: PathBuf::from("fonts"),
            output_dir: PathBuf::from("renders"),
            html_file: PathBuf::from("index.html"),
            text: "Sample <text>".into(),
            font_size: 24,
            slow_check: false,
            limit: None,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn gallery_lists_success_and_failure() {
        let ok = IndexEntry {
            path: PathBuf::from("fonts/good.ttf"),
            names: NameInfo {
                full_name: Some("Good Sans".into()),
                style: Some("Regular".into()),
                ..NameInfo::default()
            },
            quality: Quality::Pass,
            status: EntryStatus::Rendered {
                image: PathBuf::from("renders/good.ttf.png"),
            },
        };
        let bad = IndexEntry {
            path: PathBuf::from("fonts/bad.ttf"),
            names: NameInfo::default(),
            quality: Quality::Flagged("cannot parse font file fonts/bad.ttf".into()),
            status: EntryStatus::Failed {
                reason: "cannot parse font file fonts/bad.ttf".into(),
            },
        };
        let summary = IndexSummary {
            total: 2,
            rendered: 1,
            flagged: 0,
            failed: 1,
        };

        let page = gallery(&test_config(), &[ok, bad], &summary);
        assert_eq!(page.matches("<td class=\"font-name-col\">").count(), 2);
        assert!(page.contains(PASS_ICON));
        assert!(page.contains(FLAG_ICON));
        assert!(page.contains("Good Sans"));
        assert!(page.contains("renders/good.ttf.png"));
        assert!(page.contains("cannot parse font file"));
        // Sample text is escaped into the caption
        assert!(page.contains("Sample &lt;text&gt;"));
    }
}
