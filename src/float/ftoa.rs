use super::{decimal::Decimal, FloatFormat, FloatInfo};
use crate::int;

pub(super) fn append(dst: &mut String, val: f64, fmt: FloatFormat, prec: i32, info: &FloatInfo) {
    let bits = info.bits_of(val);
    let neg = bits & info.sign_bit() != 0;
    let field = ((bits >> info.mantbits) & info.max_exp_field() as u64) as i32;
    let mut mant = bits & info.mant_mask();

    if field == info.max_exp_field() {
        dst.push_str(match (mant != 0, neg) {
            (true, _) => "NaN",
            (false, true) => "-Inf",
            (false, false) => "+Inf",
        });
        return;
    }
    let mut exp = field;
    if field == 0 {
        // NOTE: denormal, same scale as the smallest normal
        exp = 1;
    } else {
        mant |= 1 << info.mantbits;
    }
    exp += info.bias;

    if fmt == FloatFormat::Binary {
        push_binary(dst, neg, mant, exp, info);
        return;
    }

    let mut d = Decimal::from(mant);
    d.shift(exp - info.mantbits as i32);
    let shortest = prec < 0;
    let layout = Layout::from(fmt);
    let prec = if shortest {
        round_shortest(&mut d, mant, exp, info);
        match layout {
            Layout::Exponent(_) => d.nd() - 1,
            Layout::Fixed => (d.nd() - d.dp()).max(0),
            Layout::General(_) => d.nd(),
        }
    } else {
        round_to_precision(&mut d, layout, prec);
        prec
    };
    push_digits(dst, neg, &d, layout, prec, shortest);
}

fn round_to_precision(d: &mut Decimal, layout: Layout, prec: i32) {
    match layout {
        Layout::Exponent(_) => d.round(prec.saturating_add(1)),
        Layout::Fixed => d.round(d.dp().saturating_add(prec)),
        Layout::General(_) => d.round(prec.max(1)),
    }
}

#[derive(Clone, Copy)]
enum Layout {
    Exponent(char),
    Fixed,
    General(char),
}

impl From<FloatFormat> for Layout {
    fn from(value: FloatFormat) -> Self {
        match value {
            FloatFormat::Exponent | FloatFormat::ExponentUpper => Self::Exponent(value.verb()),
            FloatFormat::Fixed => Self::Fixed,
            FloatFormat::Shortest => Self::General('e'),
            FloatFormat::ShortestUpper => Self::General('E'),
            // NOTE: binary has its own path and never reaches decimal layout
            FloatFormat::Binary => Self::Fixed,
        }
    }
}

fn push_digits(dst: &mut String, neg: bool, d: &Decimal, layout: Layout, prec: i32, shortest: bool) {
    match layout {
        Layout::Exponent(verb) => push_exponent(dst, neg, d, prec, verb),
        Layout::Fixed => push_fixed(dst, neg, d, prec),
        Layout::General(verb) => {
            let mut prec = if prec == 0 { 1 } else { prec };
            let eprec = if shortest {
                6
            } else if prec > d.nd() && d.nd() >= d.dp() {
                // NOTE: trailing zeros were requested but %g drops them
                d.nd()
            } else {
                prec
            };
            let exp = d.dp() - 1;
            if exp < -4 || exp >= eprec {
                prec = prec.min(d.nd());
                push_exponent(dst, neg, d, prec - 1, verb);
            } else {
                if prec > d.dp() {
                    prec = d.nd();
                }
                push_fixed(dst, neg, d, (prec - d.dp()).max(0));
            }
        }
    }
}

// %e: -d.ddddde±dd
fn push_exponent(dst: &mut String, neg: bool, d: &Decimal, prec: i32, verb: char) {
    if neg {
        dst.push('-');
    }
    dst.push(digit_char(d, 0));
    if prec > 0 {
        dst.push('.');
        dst.extend((1..=prec).map(|i| digit_char(d, i)));
    }
    dst.push(verb);
    let exp = if d.nd() == 0 { 0 } else { d.dp() - 1 };
    dst.push(if exp < 0 { '-' } else { '+' });
    let exp = exp.unsigned_abs();
    if exp < 10 {
        dst.push('0');
    }
    int::push_decimal(dst, u64::from(exp));
}

// %f: -ddddddd.ddddd
fn push_fixed(dst: &mut String, neg: bool, d: &Decimal, prec: i32) {
    if neg {
        dst.push('-');
    }
    if d.dp() > 0 {
        dst.extend((0..d.dp()).map(|i| digit_char(d, i)));
    } else {
        dst.push('0');
    }
    if prec > 0 {
        dst.push('.');
        dst.extend((0..prec).map(|i| digit_char(d, d.dp().saturating_add(i))));
    }
}

// %b: -ddddddddp±ddd
fn push_binary(dst: &mut String, neg: bool, mant: u64, exp: i32, info: &FloatInfo) {
    if neg {
        dst.push('-');
    }
    int::push_decimal(dst, mant);
    dst.push('p');
    let exp = exp - info.mantbits as i32;
    dst.push(if exp < 0 { '-' } else { '+' });
    int::push_decimal(dst, u64::from(exp.unsigned_abs()));
}

fn digit_char(d: &Decimal, i: i32) -> char {
    char::from(b'0' + d.digit(i))
}

// NOTE: rounds d to the fewest digits that still read back as the float
// mant * 2^(exp - mantbits), by comparing against the midpoints to the
// neighboring floats.
fn round_shortest(d: &mut Decimal, mant: u64, exp: i32, info: &FloatInfo) {
    if mant == 0 {
        d.clear();
        return;
    }
    let mantbits = info.mantbits as i32;
    let minexp = info.bias + 1;
    // NOTE: 332/100 approximates log2(10); when the decimal has no more
    // digits than the binary precision can distinguish it is already
    // shortest.
    if exp > minexp && 332 * (d.dp() - d.nd()) >= 100 * (exp - mantbits) {
        return;
    }

    let mut upper = Decimal::from(mant * 2 + 1);
    upper.shift(exp - mantbits - 1);

    // NOTE: the float below is half as far away when mant is a power of two
    // and not the smallest exponent, since the exponent drops.
    let (mantlo, explo) = if mant > 1 << info.mantbits || exp == minexp {
        (mant - 1, exp)
    } else {
        (mant * 2 - 1, exp - 1)
    };
    let mut lower = Decimal::from(mantlo * 2 + 1);
    lower.shift(explo - mantbits - 1);

    // NOTE: round half to even in the reader makes the exact midpoints
    // readable as this value when the mantissa is even.
    let inclusive = mant % 2 == 0;

    // NOTE: 0 while upper and d share digits, 1 once upper is exactly one
    // higher in the last compared place, 2 once the gap is larger.
    let mut upperdelta = 0u8;
    let mut ui = 0;
    loop {
        let mi = ui - upper.dp() + d.dp();
        if mi >= d.nd() {
            break;
        }
        let li = ui - upper.dp() + lower.dp();
        let l = lower.digit(li);
        let m = d.digit(mi);
        let u = upper.digit(ui);

        let okdown = l != m || (inclusive && li + 1 == lower.nd());

        upperdelta = match upperdelta {
            0 if m + 1 < u => 2,
            0 if m != u => 1,
            1 if m != 9 || u != 0 => 2,
            delta => delta,
        };
        let okup = upperdelta > 0 && (inclusive || upperdelta > 1 || ui + 1 < upper.nd());

        match (okdown, okup) {
            (true, true) => {
                d.round(mi + 1);
                return;
            }
            (true, false) => {
                d.round_down(mi + 1);
                return;
            }
            (false, true) => {
                d.round_up(mi + 1);
                return;
            }
            (false, false) => (),
        }
        ui += 1;
    }
}
