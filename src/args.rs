use crate::cmd::Cmd;
use clap::Parser;
use litconv::{FloatFormat, INT_SIZE};

#[derive(Debug, Parser)]
#[command(
    version,
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("LITCONV_COMPILER_VERSION"),
        ")"
    ),
    about
)]
pub(crate) struct Args {
    /// Log every conversion failure to stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) cmd: Cmd,
}

// NOTE: 0 requests prefix detection and is only meaningful for parsing
pub(crate) fn parse_base(s: &str) -> Result<u32, String> {
    match s.parse() {
        Ok(base @ (0 | 2..=36)) => Ok(base),
        _ => Err(format!("expected 0 or a base in 2..=36, got {s}")),
    }
}

pub(crate) fn format_base(s: &str) -> Result<u32, String> {
    match s.parse() {
        Ok(base @ 2..=36) => Ok(base),
        _ => Err(format!("expected a base in 2..=36, got {s}")),
    }
}

pub(crate) fn int_bits(s: &str) -> Result<u32, String> {
    match s.parse() {
        Ok(bits @ (0 | 8 | 16 | 32 | 64)) => Ok(bits),
        _ => Err(format!(
            "expected one of 0 (native, {INT_SIZE}), 8, 16, 32 or 64, got {s}"
        )),
    }
}

pub(crate) fn float_bits(s: &str) -> Result<u32, String> {
    match s.parse() {
        Ok(bits @ (32 | 64)) => Ok(bits),
        _ => Err(format!("expected 32 or 64, got {s}")),
    }
}

pub(crate) fn float_format(s: &str) -> Result<FloatFormat, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(verb), None) => {
            FloatFormat::try_from(verb).map_err(|verb| format!("unknown float format {verb}"))
        }
        _ => Err(format!("expected one of b, e, E, f, g or G, got {s}")),
    }
}

pub(crate) fn int_value(s: &str) -> Result<i64, String> {
    litconv::parse_int(s, 0, 64).map_err(|err| err.to_string())
}

pub(crate) fn float_value(s: &str) -> Result<f64, String> {
    litconv::parse_float(s, 64).map_err(|err| err.to_string())
}
