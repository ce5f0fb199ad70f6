#[must_use]
pub fn is_print(ch: char) -> bool {
    if ch.is_ascii() {
        return (' '..='~').contains(&ch);
    }
    // NOTE: there's no Unicode classification exposed in Rust's stdlib to
    // tell if a character has a dedicated glyph or not, so check indirectly
    // by seeing if the debug output escapes it. str::escape_debug only
    // escapes grapheme extenders in leading position, so lead with a space
    // to keep combining marks printable.
    let mut buf = [b' '; 5];
    let len = ch.encode_utf8(&mut buf[1..]).len();
    std::str::from_utf8(&buf[..=len]).map_or(false, |s| s.escape_debug().nth(1) != Some('\\'))
}
