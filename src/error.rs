use crate::quote;
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};
use tracing::trace;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Range,
    Syntax,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => f.write_str("value out of range"),
            Self::Syntax => f.write_str("invalid syntax"),
        }
    }
}

impl Error for ErrorKind {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Func {
    Atoi,
    ParseBool,
    ParseFloat,
    ParseInt,
    ParseUint,
}

impl Display for Func {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Atoi => "atoi",
            Self::ParseBool => "parse_bool",
            Self::ParseFloat => "parse_float",
            Self::ParseInt => "parse_int",
            Self::ParseUint => "parse_uint",
        })
    }
}

/// A failed conversion of `num` by `func`, carrying the best-effort result:
/// zero on a syntax error, the saturated bound on a range error.
#[derive(Clone, Debug, PartialEq)]
pub struct NumError<T> {
    func: Func,
    kind: ErrorKind,
    num: String,
    value: T,
}

impl<T> NumError<T> {
    pub(crate) fn range(func: Func, num: &str, value: T) -> Self {
        Self::new(func, num, ErrorKind::Range, value)
    }

    pub(crate) fn syntax(func: Func, num: &str, value: T) -> Self {
        Self::new(func, num, ErrorKind::Syntax, value)
    }

    fn new(func: Func, num: &str, kind: ErrorKind, value: T) -> Self {
        trace!(%func, input = num, %kind, "conversion failed");
        Self {
            func,
            kind,
            num: num.to_owned(),
            value,
        }
    }

    #[must_use]
    pub fn func(&self) -> Func {
        self.func
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn num(&self) -> &str {
        &self.num
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    pub(crate) fn convert<U>(self, func: Func, num: &str, value: U) -> NumError<U> {
        NumError {
            func,
            kind: self.kind,
            num: num.to_owned(),
            value,
        }
    }
}

impl<T: Copy> NumError<T> {
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> Display for NumError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: parsing {}: {}",
            self.func,
            quote::quote(&self.num),
            self.kind
        )
    }
}

impl<T: Debug> Error for NumError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}
