use super::{
    decimal::{self, Decimal},
    FloatInfo,
};

pub(super) fn convert(s: &str, info: &FloatInfo) -> Option<(u64, bool)> {
    if let Some(bits) = special(s, info) {
        return Some((bits, false));
    }
    let (neg, body) = match s.as_bytes() {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        b => (false, b),
    };
    match body {
        [b'0', b'x' | b'X', hex @ ..] => HexMantissa::parse(hex).map(|m| m.float_bits(neg, info)),
        _ => Decimal::parse(body, neg).map(|mut d| d.float_bits(info)),
    }
}

fn special(s: &str, info: &FloatInfo) -> Option<u64> {
    if s.eq_ignore_ascii_case("nan") {
        return Some(info.bits_of(f64::NAN));
    }
    let (neg, name) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };
    (name.eq_ignore_ascii_case("inf") || name.eq_ignore_ascii_case("infinity"))
        .then(|| info.infinity(neg))
}

// NOTE: value is mantissa * 2^exp; trunc marks dropped nonzero hex digits
#[derive(Debug, PartialEq)]
struct HexMantissa {
    exp: i32,
    mantissa: u64,
    trunc: bool,
}

impl HexMantissa {
    // NOTE: 16 hex digits fill the u64 mantissa
    const MAX_DIGITS: usize = 16;

    fn parse(s: &[u8]) -> Option<Self> {
        let mut mantissa = 0u64;
        let mut trunc = false;
        let mut nd: i32 = 0;
        let mut nd_mant: usize = 0;
        let mut dp = 0;
        let mut saw_dot = false;
        let mut saw_digits = false;
        let mut i = 0;
        while let Some(&c) = s.get(i) {
            if c == b'.' {
                if saw_dot {
                    return None;
                }
                saw_dot = true;
                dp = nd;
                i += 1;
                continue;
            }
            let Some(v) = char::from(c).to_digit(16) else {
                break;
            };
            saw_digits = true;
            if v == 0 && nd == 0 {
                dp -= 1;
            } else {
                nd += 1;
                if nd_mant < Self::MAX_DIGITS {
                    mantissa = mantissa << 4 | u64::from(v);
                    nd_mant += 1;
                } else if v != 0 {
                    trunc = true;
                }
            }
            i += 1;
        }
        if !saw_digits {
            return None;
        }
        if !saw_dot {
            dp = nd;
        }
        // NOTE: positions are counted in hex digits, exponents in bits
        dp *= 4;
        let mant_bits = nd_mant as i32 * 4;
        let Some(b'p' | b'P') = s.get(i) else {
            return None;
        };
        let (e, len) = decimal::parse_exponent(&s[i + 1..])?;
        if i + 1 + len != s.len() {
            return None;
        }
        dp += e;
        let exp = if mantissa == 0 { 0 } else { dp - mant_bits };
        Some(Self {
            exp,
            mantissa,
            trunc,
        })
    }

    fn float_bits(self, neg: bool, info: &FloatInfo) -> (u64, bool) {
        let Self {
            mut exp,
            mut mantissa,
            trunc,
        } = self;
        let mantbits = info.mantbits;
        let max_exp = info.max_exp_field() + info.bias - 1;
        let min_exp = info.bias + 1;
        exp += mantbits as i32;

        // NOTE: keep two extra bits below the mantissa for rounding, plus a
        // sticky bit for anything shifted out.
        while mantissa != 0 && mantissa >> (mantbits + 2) == 0 {
            mantissa <<= 1;
            exp -= 1;
        }
        if trunc {
            mantissa |= 1;
        }
        while mantissa >> (1 + mantbits + 2) != 0 {
            mantissa = mantissa >> 1 | mantissa & 1;
            exp += 1;
        }

        // NOTE: denormal, shift down keeping the sticky bit
        while mantissa > 1 && exp < min_exp - 2 {
            mantissa = mantissa >> 1 | mantissa & 1;
            exp += 1;
        }

        let mut round = mantissa & 3;
        mantissa >>= 2;
        round |= mantissa & 1;
        exp += 2;
        if round == 3 {
            mantissa += 1;
            if mantissa == 1 << (1 + mantbits) {
                mantissa >>= 1;
                exp += 1;
            }
        }

        if mantissa >> mantbits == 0 {
            exp = info.bias;
        }
        if exp > max_exp {
            (info.infinity(neg), true)
        } else {
            (info.assemble(mantissa, exp, neg), false)
        }
    }
}
