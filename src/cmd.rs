use crate::args;
use clap::Subcommand;
use litconv::{ErrorKind, FloatFormat, NumError};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result,
};

pub(crate) type Result = result::Result<String, CmdError>;

#[derive(Debug, Subcommand)]
pub(crate) enum Cmd {
    /// Parse a boolean
    ParseBool { text: String },
    /// Parse an integer
    ParseInt {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Base of the digits; 0 detects 0x, 0o, 0b and 0 prefixes
        #[arg(short, long, default_value_t = 10, value_parser = args::parse_base)]
        base: u32,
        /// Bit size the value must fit; 0 is the native size
        #[arg(long, default_value_t = 64, value_parser = args::int_bits)]
        bits: u32,
        /// Parse without a sign
        #[arg(short, long)]
        unsigned: bool,
    },
    /// Parse a floating-point number
    ParseFloat {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(long, default_value_t = 64, value_parser = args::float_bits)]
        bits: u32,
    },
    /// Format an integer, written in any base with a 0x, 0o or 0b prefix
    FormatInt {
        #[arg(allow_hyphen_values = true, value_parser = args::int_value)]
        value: i64,
        #[arg(short, long, default_value_t = 10, value_parser = args::format_base)]
        base: u32,
    },
    /// Format a floating-point number
    FormatFloat {
        #[arg(allow_hyphen_values = true, value_parser = args::float_value)]
        value: f64,
        /// One of b, e, E, f, g or G
        #[arg(short, long = "format", default_value = "g", value_parser = args::float_format)]
        fmt: FloatFormat,
        /// Digits of precision; negative for the shortest exact form
        #[arg(short, long, default_value_t = -1, allow_hyphen_values = true)]
        prec: i32,
        #[arg(long, default_value_t = 64, value_parser = args::float_bits)]
        bits: u32,
    },
    /// Quote text as a literal
    Quote {
        text: String,
        /// Escape all non-ASCII characters
        #[arg(long)]
        ascii: bool,
        /// Quote a single character
        #[arg(long)]
        rune: bool,
    },
    /// Read the text of a quoted literal
    Unquote { literal: String },
}

impl Cmd {
    pub(crate) fn execute(self) -> Result {
        Ok(match self {
            Self::ParseBool { text } => litconv::format_bool(litconv::parse_bool(&text)?),
            Self::ParseInt {
                text,
                base,
                bits,
                unsigned,
            } => {
                if unsigned {
                    litconv::format_uint(litconv::parse_uint(&text, base, bits)?, 10)
                } else {
                    litconv::format_int(litconv::parse_int(&text, base, bits)?, 10)
                }
            }
            Self::ParseFloat { text, bits } => {
                let f = litconv::parse_float(&text, bits)?;
                litconv::format_float(f, FloatFormat::Shortest, -1, bits)
            }
            Self::FormatInt { value, base } => litconv::format_int(value, base),
            Self::FormatFloat {
                value,
                fmt,
                prec,
                bits,
            } => {
                let value = if bits == 32 {
                    // NOTE: narrow to the nearest single, as parsing would
                    f64::from(value as f32)
                } else {
                    value
                };
                litconv::format_float(value, fmt, prec, bits)
            }
            Self::Quote { text, ascii, rune } => {
                if rune {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) if ascii => litconv::quote_rune_to_ascii(ch),
                        (Some(ch), None) => litconv::quote_rune(ch),
                        _ => return Err(CmdError::NotRune(text)),
                    }
                } else if ascii {
                    litconv::quote_to_ascii(&text)
                } else {
                    litconv::quote(&text)
                }
            }
            Self::Unquote { literal } => litconv::unquote(&literal)?,
        })
    }
}

#[derive(Debug)]
pub(crate) enum CmdError {
    Bool(NumError<bool>),
    Float(NumError<f64>),
    Int(NumError<i64>),
    NotRune(String),
    Uint(NumError<u64>),
    Unquote(ErrorKind),
}

impl Display for CmdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(err) => err.fmt(f),
            Self::Float(err) => err.fmt(f),
            Self::Int(err) => err.fmt(f),
            Self::NotRune(text) => write!(
                f,
                "expected a single character: {}",
                litconv::quote(text)
            ),
            Self::Uint(err) => err.fmt(f),
            Self::Unquote(err) => write!(f, "unquote: {err}"),
        }
    }
}

impl Error for CmdError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bool(err) => Some(err),
            Self::Float(err) => Some(err),
            Self::Int(err) => Some(err),
            Self::NotRune(_) => None,
            Self::Uint(err) => Some(err),
            Self::Unquote(err) => Some(err),
        }
    }
}

impl From<NumError<bool>> for CmdError {
    fn from(value: NumError<bool>) -> Self {
        Self::Bool(value)
    }
}

impl From<NumError<f64>> for CmdError {
    fn from(value: NumError<f64>) -> Self {
        Self::Float(value)
    }
}

impl From<NumError<i64>> for CmdError {
    fn from(value: NumError<i64>) -> Self {
        Self::Int(value)
    }
}

impl From<NumError<u64>> for CmdError {
    fn from(value: NumError<u64>) -> Self {
        Self::Uint(value)
    }
}

impl From<ErrorKind> for CmdError {
    fn from(value: ErrorKind) -> Self {
        Self::Unquote(value)
    }
}
