use crate::FOLD_CONTINUATION;
use std::borrow::Cow;

/// Fold a content line (RFC 2445 section 4.1).
///
/// Lines of at most `max_line_length` octets are returned unchanged. Longer
/// lines are split into parts of `max_line_length` octets, every part after
/// the first one starting with CRLF and a single space.
///
/// A part never ends inside a multi-octet UTF-8 sequence: the split point moves
/// back to the previous character boundary, so such parts are shorter. A single
/// character wider than `max_line_length` makes up a part on its own.
pub fn fold(line: &str, max_line_length: usize) -> Cow<'_, str> {
    if line.len() <= max_line_length {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(
        line.len() + line.len() / max_line_length.max(1) * FOLD_CONTINUATION.len(),
    );
    let mut rest = line;
    loop {
        if rest.len() <= max_line_length {
            out += rest;
            break;
        }
        let mut end = max_line_length;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            end = rest.char_indices().nth(1).map_or(rest.len(), |(idx, _)| idx);
        }
        let (part, remainder) = rest.split_at(end);
        out += part;
        if remainder.is_empty() {
            break;
        }
        out += FOLD_CONTINUATION;
        rest = remainder;
    }
    tracing::trace!(length = line.len(), max_line_length, "folded content line");
    Cow::Owned(out)
}
