use crate::error::{Func, NumError};

pub const INT_SIZE: u32 = usize::BITS;

pub(crate) const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// NOTE: base 0 infers the base from a 0x, 0o, 0b or bare 0 prefix and
// bit_size 0 means INT_SIZE
pub fn parse_uint(s: &str, base: u32, bit_size: u32) -> Result<u64, NumError<u64>> {
    let max = max_unsigned(bit_size);
    parse_magnitude(s, base, max).map_err(|kind| match kind {
        DigitsError::Range => NumError::range(Func::ParseUint, s, max),
        DigitsError::Syntax => NumError::syntax(Func::ParseUint, s, 0),
    })
}

pub fn parse_int(s: &str, base: u32, bit_size: u32) -> Result<i64, NumError<i64>> {
    let bit_size = resolve_bit_size(bit_size);
    let (neg, digits) = split_sign(s);
    let cutoff = 1u64 << (bit_size - 1);
    let un = match parse_magnitude(digits, base, max_unsigned(bit_size)) {
        Ok(un) => un,
        // NOTE: any magnitude past the cutoff saturates below
        Err(DigitsError::Range) => u64::MAX,
        Err(DigitsError::Syntax) => return Err(NumError::syntax(Func::ParseInt, s, 0)),
    };
    // NOTE: cutoff as i64 wraps to i64::MIN for 64 bits, which is the
    // correct negative bound.
    if neg && un > cutoff {
        Err(NumError::range(
            Func::ParseInt,
            s,
            (cutoff as i64).wrapping_neg(),
        ))
    } else if !neg && un >= cutoff {
        Err(NumError::range(Func::ParseInt, s, (cutoff - 1) as i64))
    } else if neg {
        Ok((un as i64).wrapping_neg())
    } else {
        Ok(un as i64)
    }
}

pub fn atoi(s: &str) -> Result<isize, NumError<isize>> {
    parse_int(s, 10, 0)
        .map(|i| i as isize)
        .map_err(|err| {
            let value = err.value() as isize;
            err.convert(Func::Atoi, s, value)
        })
}

#[must_use]
pub fn format_int(i: i64, base: u32) -> String {
    let mut s = String::new();
    append_int(&mut s, i, base);
    s
}

#[must_use]
pub fn format_uint(u: u64, base: u32) -> String {
    let mut s = String::new();
    append_uint(&mut s, u, base);
    s
}

#[must_use]
pub fn itoa(i: isize) -> String {
    format_int(i as i64, 10)
}

pub fn append_int(dst: &mut String, i: i64, base: u32) {
    push_digits(dst, i.unsigned_abs(), base, i < 0);
}

pub fn append_uint(dst: &mut String, u: u64, base: u32) {
    push_digits(dst, u, base, false);
}

pub(crate) fn push_decimal(dst: &mut String, u: u64) {
    push_digits(dst, u, 10, false);
}

enum DigitsError {
    Range,
    Syntax,
}

fn parse_magnitude(s: &str, base: u32, max: u64) -> Result<u64, DigitsError> {
    let (base, digits) = resolve_base(s, base);
    if s.is_empty() {
        return Err(DigitsError::Syntax);
    }
    let wide_base = u64::from(base);
    // NOTE: smallest n such that n * base overflows u64
    let cutoff = u64::MAX / wide_base + 1;
    let mut n = 0u64;
    for b in digits.bytes() {
        let d = digit_value(b).filter(|&d| d < base).ok_or(DigitsError::Syntax)?;
        if n >= cutoff {
            return Err(DigitsError::Range);
        }
        n *= wide_base;
        match n.checked_add(u64::from(d)) {
            Some(n1) if n1 <= max => n = n1,
            _ => return Err(DigitsError::Range),
        }
    }
    Ok(n)
}

fn resolve_base(s: &str, base: u32) -> (u32, &str) {
    match base {
        0 => {
            let b = s.as_bytes();
            if b.first() != Some(&b'0') {
                (10, s)
            } else if b.len() < 3 {
                (8, &s[1..])
            } else {
                match b[1].to_ascii_lowercase() {
                    b'b' => (2, &s[2..]),
                    b'o' => (8, &s[2..]),
                    b'x' => (16, &s[2..]),
                    _ => (8, &s[1..]),
                }
            }
        }
        2..=36 => (base, s),
        _ => panic!("invalid base: {base}"),
    }
}

fn resolve_bit_size(bit_size: u32) -> u32 {
    match bit_size {
        0 => INT_SIZE,
        1..=64 => bit_size,
        _ => panic!("invalid bit size: {bit_size}"),
    }
}

fn max_unsigned(bit_size: u32) -> u64 {
    u64::MAX >> (64 - resolve_bit_size(bit_size))
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'z' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'Z' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

fn push_digits(dst: &mut String, mut u: u64, base: u32, neg: bool) {
    assert!((2..=36).contains(&base), "invalid base: {base}");
    let wide_base = u64::from(base);
    // NOTE: 64 binary digits plus sign
    let mut buf = [0u8; 65];
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = DIGITS[(u % wide_base) as usize];
        u /= wide_base;
        if u == 0 {
            break;
        }
    }
    if neg {
        i -= 1;
        buf[i] = b'-';
    }
    dst.extend(buf[i..].iter().copied().map(char::from));
}

#[cfg(test)]
mod tests;
