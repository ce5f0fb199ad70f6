use super::FloatInfo;
use std::fmt::{self, Display, Formatter, Write};

// NOTE: enough for the exact value of the smallest f64 denormal (751
// significant digits) with room to spare; digits past this are dropped and
// remembered in trunc.
const MAX_DIGITS: usize = 800;
// NOTE: largest shift that cannot overflow the u64 accumulator of
// left_shift and right_shift (9 << 60 plus carry still fits in 64 bits).
const MAX_SHIFT: u32 = 60;
// NOTE: binary shift that keeps at least one digit left of the decimal
// point for each decimal exponent; anything past the table uses the last
// entry.
const POWERS: [i32; 9] = [1, 3, 6, 9, 13, 16, 19, 23, 26];
const MAX_POWER: i32 = 27;

// NOTE: value is 0.d[0]d[1]...d[nd-1] * 10^dp, digits stored as 0-9
#[derive(Clone)]
pub(super) struct Decimal {
    d: [u8; MAX_DIGITS],
    dp: i32,
    nd: usize,
    neg: bool,
    trunc: bool,
}

impl Decimal {
    fn new() -> Self {
        Self {
            d: [0; MAX_DIGITS],
            dp: 0,
            nd: 0,
            neg: false,
            trunc: false,
        }
    }

    pub(super) fn parse(s: &[u8], neg: bool) -> Option<Self> {
        let mut dec = Self::new();
        dec.neg = neg;
        let mut i = 0;
        // NOTE: count of significant digits including those dropped past
        // MAX_DIGITS, so the decimal point stays correct for long inputs.
        let mut seen: usize = 0;
        let mut saw_dot = false;
        let mut saw_digits = false;
        while let Some(&c) = s.get(i) {
            match c {
                b'.' => {
                    if saw_dot {
                        return None;
                    }
                    saw_dot = true;
                    dec.dp = seen as i32;
                }
                b'0'..=b'9' => {
                    saw_digits = true;
                    if c == b'0' && seen == 0 {
                        // NOTE: leading zeros only move the decimal point
                        dec.dp -= 1;
                    } else {
                        seen += 1;
                        if dec.nd < MAX_DIGITS {
                            dec.d[dec.nd] = c - b'0';
                            dec.nd += 1;
                        } else if c != b'0' {
                            dec.trunc = true;
                        }
                    }
                }
                _ => break,
            }
            i += 1;
        }
        if !saw_digits {
            return None;
        }
        if !saw_dot {
            dec.dp = seen as i32;
        }
        if let Some(b'e' | b'E') = s.get(i) {
            let (exp, len) = parse_exponent(&s[i + 1..])?;
            dec.dp += exp;
            i += 1 + len;
        }
        (i == s.len()).then_some(dec)
    }

    pub(super) fn dp(&self) -> i32 {
        self.dp
    }

    pub(super) fn nd(&self) -> i32 {
        self.nd as i32
    }

    pub(super) fn clear(&mut self) {
        self.nd = 0;
        self.dp = 0;
    }

    pub(super) fn digit(&self, i: i32) -> u8 {
        usize::try_from(i)
            .ok()
            .filter(|&i| i < self.nd)
            .map_or(0, |i| self.d[i])
    }

    pub(super) fn shift(&mut self, mut k: i32) {
        if self.nd == 0 {
            return;
        }
        let max = MAX_SHIFT as i32;
        if k > 0 {
            while k > max {
                self.left_shift(MAX_SHIFT);
                k -= max;
            }
            self.left_shift(k as u32);
        } else if k < 0 {
            while k < -max {
                self.right_shift(MAX_SHIFT);
                k += max;
            }
            self.right_shift((-k) as u32);
        }
    }

    pub(super) fn round(&mut self, nd: i32) {
        if self.should_round_up(nd) {
            self.round_up(nd);
        } else {
            self.round_down(nd);
        }
    }

    pub(super) fn round_down(&mut self, nd: i32) {
        if let Some(nd) = self.digit_count(nd) {
            self.nd = nd;
            self.trim();
        }
    }

    pub(super) fn round_up(&mut self, nd: i32) {
        let Some(nd) = self.digit_count(nd) else {
            return;
        };
        for i in (0..nd).rev() {
            if self.d[i] < 9 {
                self.d[i] += 1;
                self.nd = i + 1;
                return;
            }
        }
        // NOTE: all nines, becomes 1 in the next decimal place
        self.d[0] = 1;
        self.nd = 1;
        self.dp += 1;
    }

    // NOTE: saturates when too large for u64
    pub(super) fn rounded_integer(&self) -> u64 {
        if self.dp > 20 {
            return u64::MAX;
        }
        let dp = usize::try_from(self.dp).unwrap_or(0);
        let mut n = self.d[..dp.min(self.nd)]
            .iter()
            .fold(0u64, |n, &c| n.wrapping_mul(10).wrapping_add(u64::from(c)));
        for _ in self.nd..dp {
            n = n.wrapping_mul(10);
        }
        if self.should_round_up(self.dp) {
            n = n.wrapping_add(1);
        }
        n
    }

    pub(super) fn float_bits(&mut self, info: &FloatInfo) -> (u64, bool) {
        match self.binary_parts(info) {
            Some((mant, exp)) => (info.assemble(mant, exp, self.neg), false),
            None => (info.infinity(self.neg), true),
        }
    }

    fn binary_parts(&mut self, info: &FloatInfo) -> Option<(u64, i32)> {
        if self.nd == 0 || self.dp < -330 {
            return Some((0, info.bias));
        }
        if self.dp > 310 {
            return None;
        }
        // NOTE: scale into [0.5, 1) by powers of two
        let mut exp = 0;
        while self.dp > 0 {
            let n = power_for(self.dp);
            self.shift(-n);
            exp += n;
        }
        while self.dp < 0 || (self.dp == 0 && self.d[0] < 5) {
            let n = power_for(-self.dp);
            self.shift(n);
            exp -= n;
        }
        // NOTE: float mantissas live in [1, 2)
        exp -= 1;
        // NOTE: denormal, move the exponent up to the minimum
        if exp < info.bias + 1 {
            let n = info.bias + 1 - exp;
            self.shift(-n);
            exp += n;
        }
        if exp - info.bias >= info.max_exp_field() {
            return None;
        }
        self.shift(1 + info.mantbits as i32);
        let mut mant = self.rounded_integer();
        // NOTE: rounding carried into a new top bit
        if mant == 2 << info.mantbits {
            mant >>= 1;
            exp += 1;
            if exp - info.bias >= info.max_exp_field() {
                return None;
            }
        }
        if mant & (1 << info.mantbits) == 0 {
            exp = info.bias;
        }
        Some((mant, exp))
    }

    fn should_round_up(&self, nd: i32) -> bool {
        let Some(nd) = self.digit_count(nd) else {
            return false;
        };
        if self.d[nd] == 5 && nd + 1 == self.nd {
            // NOTE: exactly halfway unless digits were dropped
            self.trunc || (nd > 0 && self.d[nd - 1] % 2 == 1)
        } else {
            self.d[nd] >= 5
        }
    }

    // NOTE: nd as an index strictly inside the stored digits
    fn digit_count(&self, nd: i32) -> Option<usize> {
        usize::try_from(nd).ok().filter(|&nd| nd < self.nd)
    }

    fn left_shift(&mut self, k: u32) {
        // NOTE: 2^60 < 10^19 so a shift adds at most 19 leading digits
        const GROWTH: usize = 19;
        let mut buf = [0u8; MAX_DIGITS + GROWTH];
        let end = self.nd + GROWTH;
        let mut w = end;
        let mut n = 0u64;
        for &c in self.d[..self.nd].iter().rev() {
            n += u64::from(c) << k;
            let quo = n / 10;
            w -= 1;
            buf[w] = (n - quo * 10) as u8;
            n = quo;
        }
        while n > 0 {
            let quo = n / 10;
            w -= 1;
            buf[w] = (n - quo * 10) as u8;
            n = quo;
        }
        let len = end - w;
        self.dp += (len - self.nd) as i32;
        let kept = len.min(MAX_DIGITS);
        if buf[w + kept..end].iter().any(|&c| c != 0) {
            self.trunc = true;
        }
        self.d[..kept].copy_from_slice(&buf[w..w + kept]);
        self.nd = kept;
        self.trim();
    }

    fn right_shift(&mut self, k: u32) {
        let mut r = 0;
        let mut w = 0;
        let mut n = 0u64;
        // NOTE: pick up enough leading digits to produce the first output digit
        while n >> k == 0 {
            if r >= self.nd {
                if n == 0 {
                    self.clear();
                    return;
                }
                while n >> k == 0 {
                    n *= 10;
                    r += 1;
                }
                break;
            }
            n = n * 10 + u64::from(self.d[r]);
            r += 1;
        }
        self.dp -= r as i32 - 1;
        let mask = (1u64 << k) - 1;
        while r < self.nd {
            let c = u64::from(self.d[r]);
            self.d[w] = (n >> k) as u8;
            w += 1;
            n = (n & mask) * 10 + c;
            r += 1;
        }
        while n > 0 {
            let dig = (n >> k) as u8;
            n &= mask;
            if w < MAX_DIGITS {
                self.d[w] = dig;
                w += 1;
            } else if dig > 0 {
                self.trunc = true;
            }
            n *= 10;
        }
        self.nd = w;
        self.trim();
    }

    fn trim(&mut self) {
        while self.nd > 0 && self.d[self.nd - 1] == 0 {
            self.nd -= 1;
        }
        if self.nd == 0 {
            self.dp = 0;
        }
    }
}

impl From<u64> for Decimal {
    fn from(mut value: u64) -> Self {
        let mut dec = Self::new();
        // NOTE: u64::MAX has 20 digits
        let mut buf = [0u8; 20];
        let mut n = 0;
        while value > 0 {
            buf[n] = (value % 10) as u8;
            value /= 10;
            n += 1;
        }
        for (i, &c) in buf[..n].iter().rev().enumerate() {
            dec.d[i] = c;
        }
        dec.nd = n;
        dec.dp = n as i32;
        dec.trim();
        dec
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.nd == 0 {
            return f.write_char('0');
        }
        let digits = &self.d[..self.nd];
        if self.dp <= 0 {
            f.write_str("0.")?;
            write_zeros(f, self.dp.unsigned_abs() as usize)?;
            write_digits(f, digits)
        } else if self.nd <= self.dp as usize {
            write_digits(f, digits)?;
            write_zeros(f, self.dp as usize - self.nd)
        } else {
            let (int, frac) = digits.split_at(self.dp as usize);
            write_digits(f, int)?;
            f.write_char('.')?;
            write_digits(f, frac)
        }
    }
}

pub(super) fn parse_exponent(s: &[u8]) -> Option<(i32, usize)> {
    let (neg, mut i) = match s.first() {
        Some(b'+') => (false, 1),
        Some(b'-') => (true, 1),
        _ => (false, 0),
    };
    let start = i;
    let mut e: i32 = 0;
    while let Some(&c @ b'0'..=b'9') = s.get(i) {
        if e < 10_000 {
            e = e * 10 + i32::from(c - b'0');
        }
        i += 1;
    }
    if i == start {
        return None;
    }
    Some((if neg { -e } else { e }, i))
}

fn power_for(dp: i32) -> i32 {
    usize::try_from(dp)
        .ok()
        .and_then(|i| POWERS.get(i))
        .copied()
        .unwrap_or(MAX_POWER)
}

fn write_digits(f: &mut Formatter<'_>, digits: &[u8]) -> fmt::Result {
    digits
        .iter()
        .try_for_each(|&c| f.write_char(char::from(b'0' + c)))
}

fn write_zeros(f: &mut Formatter<'_>, n: usize) -> fmt::Result {
    (0..n).try_for_each(|_| f.write_char('0'))
}
