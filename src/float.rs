mod atof;
mod decimal;
mod ftoa;

use crate::error::{Func, NumError};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FloatFormat {
    Binary,
    Exponent,
    ExponentUpper,
    Fixed,
    Shortest,
    ShortestUpper,
}

impl FloatFormat {
    #[must_use]
    pub fn verb(self) -> char {
        match self {
            Self::Binary => 'b',
            Self::Exponent => 'e',
            Self::ExponentUpper => 'E',
            Self::Fixed => 'f',
            Self::Shortest => 'g',
            Self::ShortestUpper => 'G',
        }
    }
}

impl Display for FloatFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())
    }
}

impl TryFrom<char> for FloatFormat {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            'b' => Self::Binary,
            'e' => Self::Exponent,
            'E' => Self::ExponentUpper,
            'f' => Self::Fixed,
            'g' => Self::Shortest,
            'G' => Self::ShortestUpper,
            _ => return Err(value),
        })
    }
}

// NOTE: any bit_size other than 32 reads as a double
pub fn parse_float(s: &str, bit_size: u32) -> Result<f64, NumError<f64>> {
    let info = if bit_size == 32 {
        &FloatInfo::F32
    } else {
        &FloatInfo::F64
    };
    match atof::convert(s, info) {
        Some((bits, false)) => Ok(info.to_f64(bits)),
        Some((bits, true)) => Err(NumError::range(Func::ParseFloat, s, info.to_f64(bits))),
        None => Err(NumError::syntax(Func::ParseFloat, s, 0.0)),
    }
}

// NOTE: a negative prec gives the fewest digits that read back as f
#[must_use]
pub fn format_float(f: f64, fmt: FloatFormat, prec: i32, bit_size: u32) -> String {
    let mut s = String::new();
    append_float(&mut s, f, fmt, prec, bit_size);
    s
}

pub fn append_float(dst: &mut String, f: f64, fmt: FloatFormat, prec: i32, bit_size: u32) {
    let info = match bit_size {
        32 => &FloatInfo::F32,
        64 => &FloatInfo::F64,
        _ => panic!("invalid float bit size: {bit_size}"),
    };
    ftoa::append(dst, f, fmt, prec, info);
}

// NOTE: IEEE-754 binary layout; bias is the negated exponent bias so that
// exp - bias yields the stored exponent field.
#[derive(Debug)]
struct FloatInfo {
    bias: i32,
    expbits: u32,
    mantbits: u32,
}

impl FloatInfo {
    const F32: Self = Self {
        bias: -127,
        expbits: 8,
        mantbits: 23,
    };
    const F64: Self = Self {
        bias: -1023,
        expbits: 11,
        mantbits: 52,
    };

    fn is_single(&self) -> bool {
        self.mantbits == Self::F32.mantbits
    }

    // NOTE: all ones, reserved for infinities and NaN
    fn max_exp_field(&self) -> i32 {
        (1 << self.expbits) - 1
    }

    fn mant_mask(&self) -> u64 {
        (1 << self.mantbits) - 1
    }

    fn sign_bit(&self) -> u64 {
        1 << (self.mantbits + self.expbits)
    }

    fn assemble(&self, mant: u64, exp: i32, neg: bool) -> u64 {
        let mut bits = mant & self.mant_mask();
        bits |= (((exp - self.bias) & self.max_exp_field()) as u64) << self.mantbits;
        if neg {
            bits |= self.sign_bit();
        }
        bits
    }

    fn infinity(&self, neg: bool) -> u64 {
        self.assemble(0, self.max_exp_field() + self.bias, neg)
    }

    fn bits_of(&self, f: f64) -> u64 {
        if self.is_single() {
            u64::from((f as f32).to_bits())
        } else {
            f.to_bits()
        }
    }

    fn to_f64(&self, bits: u64) -> f64 {
        if self.is_single() {
            f64::from(f32::from_bits(bits as u32))
        } else {
            f64::from_bits(bits)
        }
    }
}
