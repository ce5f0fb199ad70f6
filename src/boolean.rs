use crate::error::{Func, NumError};

pub fn parse_bool(s: &str) -> Result<bool, NumError<bool>> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(NumError::syntax(Func::ParseBool, s, false)),
    }
}

#[must_use]
pub fn format_bool(b: bool) -> String {
    let mut s = String::new();
    append_bool(&mut s, b);
    s
}

pub fn append_bool(dst: &mut String, b: bool) {
    dst.push_str(if b { "true" } else { "false" });
}
