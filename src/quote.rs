use crate::{error::ErrorKind, int::DIGITS, printable::is_print};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuoteKind {
    None,
    Single,
    Double,
}

impl QuoteKind {
    fn delimiter(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Single => Some('\''),
            Self::Double => Some('"'),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnquotedChar<'a> {
    pub value: u32,
    /// Whether `value` is a code point rather than a raw byte.
    pub multibyte: bool,
    pub tail: &'a str,
}

#[must_use]
pub fn quote(s: &str) -> String {
    let mut buf = String::with_capacity(s.len() + 2);
    append_quote(&mut buf, s);
    buf
}

pub fn append_quote(dst: &mut String, s: &str) {
    push_quoted(dst, s.chars(), '"', false);
}

#[must_use]
pub fn quote_to_ascii(s: &str) -> String {
    let mut buf = String::with_capacity(s.len() + 2);
    append_quote_to_ascii(&mut buf, s);
    buf
}

pub fn append_quote_to_ascii(dst: &mut String, s: &str) {
    push_quoted(dst, s.chars(), '"', true);
}

#[must_use]
pub fn quote_rune(ch: char) -> String {
    let mut buf = String::with_capacity(3);
    append_quote_rune(&mut buf, ch);
    buf
}

pub fn append_quote_rune(dst: &mut String, ch: char) {
    push_quoted(dst, [ch], '\'', false);
}

#[must_use]
pub fn quote_rune_to_ascii(ch: char) -> String {
    let mut buf = String::with_capacity(3);
    append_quote_rune_to_ascii(&mut buf, ch);
    buf
}

pub fn append_quote_rune_to_ascii(dst: &mut String, ch: char) {
    push_quoted(dst, [ch], '\'', true);
}

#[must_use]
pub fn can_backquote(s: &str) -> bool {
    !s.chars()
        .any(|ch| (ch < ' ' && ch != '\t') || ch == '`' || ch == '\x7f')
}

pub fn unquote_char(s: &str, kind: QuoteKind) -> Result<UnquotedChar<'_>, ErrorKind> {
    let mut chars = s.chars();
    let ch = chars.next().ok_or(ErrorKind::Syntax)?;
    if Some(ch) == kind.delimiter() {
        return Err(ErrorKind::Syntax);
    }
    if !ch.is_ascii() {
        return Ok(UnquotedChar {
            value: ch.into(),
            multibyte: true,
            tail: chars.as_str(),
        });
    }
    if ch != '\\' {
        return Ok(UnquotedChar {
            value: ch.into(),
            multibyte: false,
            tail: chars.as_str(),
        });
    }

    let esc = chars.next().ok_or(ErrorKind::Syntax)?;
    let rest = chars.as_str();
    let simple = |value: char| UnquotedChar {
        value: value.into(),
        multibyte: false,
        tail: rest,
    };
    match esc {
        'a' => Ok(simple('\x07')),
        'b' => Ok(simple('\x08')),
        'f' => Ok(simple('\x0c')),
        'n' => Ok(simple('\n')),
        'r' => Ok(simple('\r')),
        't' => Ok(simple('\t')),
        'v' => Ok(simple('\x0b')),
        '\\' => Ok(simple('\\')),
        '\'' | '"' if Some(esc) == kind.delimiter() => Ok(simple(esc)),
        'x' => {
            let (value, tail) = read_digits(rest, 2, 16)?;
            Ok(UnquotedChar {
                value,
                multibyte: false,
                tail,
            })
        }
        'u' | 'U' => {
            let (value, tail) = read_digits(rest, if esc == 'u' { 4 } else { 8 }, 16)?;
            // NOTE: surrogates and values past U+10FFFF are not characters
            char::from_u32(value).ok_or(ErrorKind::Syntax)?;
            Ok(UnquotedChar {
                value,
                multibyte: true,
                tail,
            })
        }
        '0'..='7' => {
            // NOTE: the first octal digit was already consumed as esc
            let (low, tail) = read_digits(rest, 2, 8)?;
            let value = (esc as u32 - '0' as u32) << 6 | low;
            if value > 0xff {
                return Err(ErrorKind::Syntax);
            }
            Ok(UnquotedChar {
                value,
                multibyte: false,
                tail,
            })
        }
        _ => Err(ErrorKind::Syntax),
    }
}

pub fn unquote_bytes(s: &str) -> Result<Vec<u8>, ErrorKind> {
    let b = s.as_bytes();
    let (&first, &last) = b.first().zip(b.last()).ok_or(ErrorKind::Syntax)?;
    if b.len() < 2 || first != last {
        return Err(ErrorKind::Syntax);
    }
    // NOTE: delimiters are ASCII so slicing stays on char boundaries
    let body = &s[1..s.len() - 1];
    let kind = match first {
        b'`' => {
            if body.contains(['`', '\r']) {
                return Err(ErrorKind::Syntax);
            }
            return Ok(body.as_bytes().to_vec());
        }
        b'"' => QuoteKind::Double,
        b'\'' => QuoteKind::Single,
        _ => return Err(ErrorKind::Syntax),
    };
    if body.contains('\n') {
        return Err(ErrorKind::Syntax);
    }

    if !body.contains(['\\', char::from(first)]) {
        return match kind {
            QuoteKind::Single if body.chars().count() != 1 => Err(ErrorKind::Syntax),
            _ => Ok(body.as_bytes().to_vec()),
        };
    }

    let mut buf = Vec::with_capacity(body.len());
    let mut rest = body;
    while !rest.is_empty() {
        let uc = unquote_char(rest, kind)?;
        rest = uc.tail;
        match char::from_u32(uc.value).filter(|_| uc.multibyte) {
            Some(ch) => {
                let mut enc = [0; 4];
                buf.extend_from_slice(ch.encode_utf8(&mut enc).as_bytes());
            }
            // NOTE: byte escapes and ASCII are at most 0xff
            None => buf.push(uc.value as u8),
        }
        if kind == QuoteKind::Single && !rest.is_empty() {
            return Err(ErrorKind::Syntax);
        }
    }
    if kind == QuoteKind::Single && buf.is_empty() {
        return Err(ErrorKind::Syntax);
    }
    Ok(buf)
}

pub fn unquote(s: &str) -> Result<String, ErrorKind> {
    String::from_utf8(unquote_bytes(s)?).map_err(|_| ErrorKind::Syntax)
}

fn push_quoted(dst: &mut String, chars: impl IntoIterator<Item = char>, quote: char, ascii_only: bool) {
    dst.push(quote);
    for ch in chars {
        push_escaped(dst, ch, quote, ascii_only);
    }
    dst.push(quote);
}

fn push_escaped(dst: &mut String, ch: char, quote: char, ascii_only: bool) {
    if ch == quote || ch == '\\' {
        dst.push('\\');
        dst.push(ch);
        return;
    }
    if is_print(ch) && (ch.is_ascii() || !ascii_only) {
        dst.push(ch);
        return;
    }
    match ch {
        '\x07' => dst.push_str("\\a"),
        '\x08' => dst.push_str("\\b"),
        '\x0c' => dst.push_str("\\f"),
        '\n' => dst.push_str("\\n"),
        '\r' => dst.push_str("\\r"),
        '\t' => dst.push_str("\\t"),
        '\x0b' => dst.push_str("\\v"),
        '\0'..='\x1f' | '\x7f' => {
            dst.push_str("\\x");
            push_hex(dst, ch.into(), 2);
        }
        '\u{80}'..='\u{ffff}' => {
            dst.push_str("\\u");
            push_hex(dst, ch.into(), 4);
        }
        _ => {
            dst.push_str("\\U");
            push_hex(dst, ch.into(), 8);
        }
    }
}

fn push_hex(dst: &mut String, value: u32, width: u32) {
    for shift in (0..width).rev() {
        dst.push(char::from(DIGITS[(value >> (4 * shift) & 0xf) as usize]));
    }
}

// NOTE: reads exactly n digits of radix; the digits are ASCII so the tail
// slice stays on a char boundary.
fn read_digits(s: &str, n: usize, radix: u32) -> Result<(u32, &str), ErrorKind> {
    let digits = s.as_bytes().get(..n).ok_or(ErrorKind::Syntax)?;
    let value = digits.iter().try_fold(0, |acc, &b| {
        char::from(b)
            .to_digit(radix)
            .map(|d| acc * radix + d)
            .ok_or(ErrorKind::Syntax)
    })?;
    Ok((value, &s[n..]))
}
