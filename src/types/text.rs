//! TEXT values (RFC 2445 section 4.3.11)

/// Escape backslashes, newlines, commas and semicolons.
///
/// Backslashes are escaped before anything else so the escapes introduced for
/// the other characters are never escaped a second time.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\n' => out.push_str(r"\n"),
            ',' => out.push_str(r"\,"),
            ';' => out.push_str(r"\;"),
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_text`].
///
/// Both `\n` and `\N` decode to a newline. A backslash followed by any other
/// character, or a trailing backslash, is kept literally.
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(escaped @ ('\\' | ',' | ';')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
