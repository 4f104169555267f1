//! Canonicalization of recognized-text symbols.
//!
//! Recognition engines emit typographic variants of the ASCII symbols the
//! diagram grammars look for. [`normalize`] maps them back so that later
//! stages only need to handle one spelling.

/// Canonicalize the symbols of recognized text.
///
/// - en dash, em dash and minus sign become `-`
/// - bullet glyphs (`•`, `·`) become `.`
/// - directional arrow glyphs become `>`
/// - non-breaking spaces become plain spaces
/// - carriage returns are dropped
/// - runs of two or more spaces or tabs collapse to a single space
/// - leading and trailing whitespace is trimmed
///
/// Line breaks are preserved, so the result can still be split into blocks.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = String::new();

    for ch in raw.chars() {
        let ch = match ch {
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            '\u{2022}' | '\u{00B7}' => '.',
            '\u{2192}' | '\u{2794}' | '\u{27A4}' | '\u{279D}' | '\u{279B}' | '\u{279C}' => '>',
            '\u{00A0}' => ' ',
            '\r' => continue,
            other => other,
        };

        if ch == ' ' || ch == '\t' {
            blank_run.push(ch);
            continue;
        }

        flush_blank_run(&mut out, &mut blank_run);
        out.push(ch);
    }
    flush_blank_run(&mut out, &mut blank_run);

    out.trim().to_string()
}

fn flush_blank_run(out: &mut String, blank_run: &mut String) {
    match blank_run.chars().count() {
        0 => {}
        1 => out.push_str(blank_run),
        _ => out.push(' '),
    }
    blank_run.clear();
}
