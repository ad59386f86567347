//! Bracket matching and quote-aware scanning
//!
//! Two primitives the parser is built on:
//!
//! - [`find_matching_close`] counts depth for a single bracket pair. It is used for
//!   the structural brackets of a signature: the outer `(...)`, `[...]` optional
//!   groups and `(a1, a2, ...)` grouped names.
//! - [`scan_to`] walks forward to the first un-nested stop character, skipping whole
//!   bracketed and quoted constructs on the way. It keeps a comma inside
//!   `('_x', '_y')` or `'Union[int, float]'` from being read as a separator.
//!
//! Every delimiter involved is ASCII, so the byte offsets returned here always
//! fall on `char` boundaries and are safe to slice with.

/// Index of the `close` that balances the `open` at `text[0]`
///
/// Returns `None` when `text` does not start with `open` or runs out first.
pub fn find_matching_close(text: &str, open: char, close: char) -> Option<usize> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, first)) if first == open => {}
        _ => return None,
    }

    let mut depth = 1usize;
    for (index, ch) in chars {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Closing counterpart of a bracket opener
fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

/// Length of the shortest prefix of `text` without an un-nested stop character
///
/// The result is the byte index of the first top-level stop, or `text.len()` when
/// the text ends cleanly without one. `None` means a construct opened inside the
/// scanned region (bracket or quote) was never closed.
///
/// Stops are checked before openers, so a stop set containing `[` ends at the `[`
/// instead of skipping over the bracketed text. Inside brackets only the expected
/// closer matters; quoted text is opaque and honours backslash escapes. A `<` only
/// opens a repr such as `<no value>` when its `>` comes before the next boundary
/// (a top-level stop, or the pending closer inside brackets); otherwise it is a
/// comparison (`a=x<1`, `a=x<=1`) and an ordinary character. Reprs do not nest.
pub fn scan_to(text: &str, stops: &[char]) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pending: Vec<u8> = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];

        if pending.is_empty() && byte.is_ascii() && stops.contains(&char::from(byte)) {
            return Some(index);
        }

        if byte == b'\'' || byte == b'"' {
            index = skip_quoted(bytes, index)?;
            continue;
        }

        if pending.last() == Some(&byte) {
            pending.pop();
            index += 1;
            continue;
        }

        match byte {
            b'(' => pending.push(b')'),
            b'[' => pending.push(b']'),
            b'{' => pending.push(b'}'),
            b'<' if !pending.contains(&b'>')
                && angle_closes(&bytes[index + 1..], stops, pending.last().copied()) =>
            {
                pending.push(b'>')
            }
            _ => {}
        }
        index += 1;
    }

    if pending.is_empty() {
        Some(bytes.len())
    } else {
        None
    }
}

/// Whether a `>` shows up before the scan would hit its next boundary
fn angle_closes(rest: &[u8], stops: &[char], pending: Option<u8>) -> bool {
    for &byte in rest {
        if byte == b'>' {
            return true;
        }
        let boundary = match pending {
            Some(closer) => byte == closer,
            None => byte.is_ascii() && stops.contains(&char::from(byte)),
        };
        if boundary {
            return false;
        }
    }
    false
}

/// Index of the closer balancing the bracket at `text[0]`, skipping quoted text
/// and other nested constructs on the way
pub(crate) fn skip_group(text: &str) -> Option<usize> {
    let open = text.chars().next()?;
    let close = closer_for(open)?;
    let inner = &text[open.len_utf8()..];
    let end = scan_to(inner, &[close])?;
    if end < inner.len() {
        Some(end + open.len_utf8())
    } else {
        None
    }
}

/// Position just past the quote closing the one at `bytes[start]`
fn skip_quoted(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut index = start + 1;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            byte if byte == quote => return Some(index + 1),
            _ => index += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("()", '(', ')', Some(1))]
    #[case("(a, (b, c)) -> int", '(', ')', Some(10))]
    #[case("[, step,]", '[', ']', Some(8))]
    #[case("[[a], b]", '[', ']', Some(7))]
    #[case("(a, b", '(', ')', None)]
    #[case("a)", '(', ')', None)]
    #[case("", '(', ')', None)]
    fn test_find_matching_close(
        #[case] text: &str,
        #[case] open: char,
        #[case] close: char,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_matching_close(text, open, close), expected);
    }

    #[test]
    fn test_find_matching_close_counts_depth_only() {
        // Quotes are not special for the structural matcher
        assert_eq!(find_matching_close("(')')", '(', ')'), Some(2));
    }

    #[rstest]
    #[case("a, b)", &[',', ')'], Some(1))]
    #[case("('_x', '_y')), b", &[',', ')'], Some(12))]
    #[case("'Union[int, float]', stop", &[','], Some(19))]
    #[case("\"a,b\" , c", &[','], Some(6))]
    #[case("<object at 0x7f>, b", &[','], Some(16))]
    #[case("x<1, b", &[','], Some(3))]
    #[case("n<2, b=<no value>", &[','], Some(3))]
    #[case("x<=1, b=y>=2", &[','], Some(4))]
    #[case("f(a<b), c>d", &[','], Some(6))]
    #[case("<a <b> c>, d", &[','], Some(9))]
    #[case("func(a, b=(1, 2))", &[','], Some(17))]
    #[case("plain", &[','], Some(5))]
    #[case("", &[','], Some(0))]
    fn test_scan_to(#[case] text: &str, #[case] stops: &[char], #[case] expected: Option<usize>) {
        assert_eq!(scan_to(text, stops), expected);
    }

    #[test]
    fn test_scan_to_stop_wins_over_opener() {
        assert_eq!(scan_to("stop[, step]", &[',', '[']), Some(4));
        assert_eq!(scan_to("Optional[int, str] = 1", &['=', ',']), Some(19));
    }

    #[test]
    fn test_scan_to_unclosed_constructs() {
        assert_eq!(scan_to("'abc, d", &[',']), None);
        assert_eq!(scan_to("f(a, b", &[',']), None);
        assert_eq!(scan_to("[1, 2", &[',']), None);
    }

    #[test]
    fn test_scan_to_quote_escapes_and_brackets_inside_quotes() {
        assert_eq!(scan_to(r"'it\'s, fine', x", &[',']), Some(13));
        assert_eq!(scan_to("')', b", &[',', ')']), Some(3));
    }

    #[test]
    fn test_scan_to_non_ascii_text() {
        let text = "naïve='é', b";
        let end = scan_to(text, &[',']).unwrap();
        assert_eq!(&text[..end], "naïve='é'");
    }

    #[test]
    fn test_skip_group() {
        assert_eq!(skip_group("(None, None)], *"), Some(11));
        assert_eq!(skip_group("[0,1]) -> Tensor"), Some(4));
        assert_eq!(skip_group("{'a': ')'}, b"), Some(9));
        assert_eq!(skip_group("(1, 2"), None);
        assert_eq!(skip_group("abc"), None);
    }
}
