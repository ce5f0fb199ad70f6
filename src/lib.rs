mod boolean;
mod error;
mod float;
mod int;
mod printable;
mod quote;
#[cfg(test)]
mod testutil;

pub use self::{
    boolean::{append_bool, format_bool, parse_bool},
    error::{ErrorKind, Func, NumError},
    float::{append_float, format_float, parse_float, FloatFormat},
    int::{
        append_int, append_uint, atoi, format_int, format_uint, itoa, parse_int, parse_uint,
        INT_SIZE,
    },
    printable::is_print,
    quote::{
        append_quote, append_quote_rune, append_quote_rune_to_ascii, append_quote_to_ascii,
        can_backquote, quote, quote_rune, quote_rune_to_ascii, quote_to_ascii, unquote,
        unquote_bytes, unquote_char, QuoteKind, UnquotedChar,
    },
};
