// Shared test support: a tiny but complete TrueType font built in memory.
//
// Three glyphs: notdef (no outline), 'A' (a rectangular contour) and space
// (mapped, no outline). Metrics: 1000 units per Em, ascender 800, descender
// -200. Advances: notdef 500, 'A' 600, space 300. Every other character,
// 'B' included, is unmapped.

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(buf: &mut Vec<u8>, v: i16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 1); // majorVersion
    push_u16(&mut t, 0); // minorVersion
    push_u32(&mut t, 0); // fontRevision
    push_u32(&mut t, 0); // checkSumAdjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, 1000); // unitsPerEm
    t.extend_from_slice(&[0u8; 16]); // created + modified
    push_i16(&mut t, 0); // xMin
    push_i16(&mut t, -200); // yMin
    push_i16(&mut t, 600); // xMax
    push_i16(&mut t, 800); // yMax
    push_u16(&mut t, 0); // macStyle
    push_u16(&mut t, 8); // lowestRecPPEM
    push_i16(&mut t, 2); // fontDirectionHint
    push_i16(&mut t, 0); // indexToLocFormat: short
    push_i16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_i16(&mut t, 800); // ascender
    push_i16(&mut t, -200); // descender
    push_i16(&mut t, 0); // lineGap
    push_u16(&mut t, 600); // advanceWidthMax
    push_i16(&mut t, 0); // minLeftSideBearing
    push_i16(&mut t, 50); // minRightSideBearing
    push_i16(&mut t, 550); // xMaxExtent
    push_i16(&mut t, 1); // caretSlopeRise
    push_i16(&mut t, 0); // caretSlopeRun
    push_i16(&mut t, 0); // caretOffset
    t.extend_from_slice(&[0u8; 8]); // reserved
    push_i16(&mut t, 0); // metricDataFormat
    push_u16(&mut t, 3); // numberOfHMetrics
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version 1.0
    push_u16(&mut t, 3); // numGlyphs
    push_u16(&mut t, 4); // maxPoints
    push_u16(&mut t, 1); // maxContours
    push_u16(&mut t, 0); // maxCompositePoints
    push_u16(&mut t, 0); // maxCompositeContours
    push_u16(&mut t, 2); // maxZones
    t.extend_from_slice(&[0u8; 16]); // remaining limits, all zero
    t
}

fn hmtx() -> Vec<u8> {
    let mut t = Vec::new();
    for (advance, lsb) in [(500u16, 0i16), (600, 50), (300, 0)] {
        push_u16(&mut t, advance);
        push_i16(&mut t, lsb);
    }
    t
}

fn cmap() -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 0); // version
    push_u16(&mut t, 1); // one encoding record
    push_u16(&mut t, 3); // platform: Windows
    push_u16(&mut t, 1); // encoding: Unicode BMP
    push_u32(&mut t, 12); // subtable offset

    // Format 4, three segments: ' ' -> glyph 2, 'A' -> glyph 1, and the
    // required 0xFFFF terminator mapping nothing.
    push_u16(&mut t, 4); // format
    push_u16(&mut t, 40); // length
    push_u16(&mut t, 0); // language
    push_u16(&mut t, 6); // segCountX2
    push_u16(&mut t, 4); // searchRange
    push_u16(&mut t, 1); // entrySelector
    push_u16(&mut t, 2); // rangeShift
    for end in [0x20u16, 0x41, 0xFFFF] {
        push_u16(&mut t, end);
    }
    push_u16(&mut t, 0); // reservedPad
    for start in [0x20u16, 0x41, 0xFFFF] {
        push_u16(&mut t, start);
    }
    for delta in [-30i16, -64, 1] {
        push_i16(&mut t, delta);
    }
    for range_offset in [0u16, 0, 0] {
        push_u16(&mut t, range_offset);
    }
    t
}

// Glyph 1: a 500x700 rectangle with its left side bearing at x=50.
fn glyf() -> Vec<u8> {
    let mut t = Vec::new();
    push_i16(&mut t, 1); // numberOfContours
    push_i16(&mut t, 50); // xMin
    push_i16(&mut t, 0); // yMin
    push_i16(&mut t, 550); // xMax
    push_i16(&mut t, 700); // yMax
    push_u16(&mut t, 3); // endPtsOfContours: four points
    push_u16(&mut t, 0); // instructionLength
    t.extend_from_slice(&[0x01; 4]); // on-curve, 16-bit deltas
    for dx in [50i16, 500, 0, -500] {
        push_i16(&mut t, dx);
    }
    for dy in [0i16, 0, 700, 0] {
        push_i16(&mut t, dy);
    }
    t
}

fn loca(glyf_len: u16) -> Vec<u8> {
    let mut t = Vec::new();
    // Short format, offsets halved: notdef and space are empty ranges.
    for off in [0u16, 0, glyf_len / 2, glyf_len / 2] {
        push_u16(&mut t, off);
    }
    t
}

/// Assemble the font: sfnt header, sorted table directory, padded tables
pub fn sample_font() -> Vec<u8> {
    let glyf = glyf();
    let tables: [(&[u8; 4], Vec<u8>); 7] = [
        (b"cmap", cmap()),
        (b"glyf", glyf.clone()),
        (b"head", head()),
        (b"hhea", hhea()),
        (b"hmtx", hmtx()),
        (b"loca", loca(glyf.len() as u16)),
        (b"maxp", maxp()),
    ];

    let num_tables = tables.len() as u16;
    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000); // sfnt version: TrueType
    push_u16(&mut font, num_tables);
    push_u16(&mut font, 64); // searchRange: 16 × 2^floor(log2(7))
    push_u16(&mut font, 2); // entrySelector
    push_u16(&mut font, num_tables * 16 - 64); // rangeShift

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        push_u32(&mut font, 0); // checksum: not verified by the parser
        push_u32(&mut font, offset as u32);
        push_u32(&mut font, data.len() as u32);
        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    font.extend_from_slice(&body);
    font
}
