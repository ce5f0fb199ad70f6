use super::*;
use crate::{
    error::ErrorKind,
    testutil::{err_or_fail, ok_or_fail},
};

mod parse_uint {
    use super::*;

    #[test]
    fn decimal() {
        let cases = [
            ("0", 0),
            ("1", 1),
            ("12345", 12345),
            ("012345", 12345),
            ("18446744073709551615", u64::MAX),
        ];
        for (inp, exp) in cases {
            assert_eq!(ok_or_fail!(parse_uint(inp, 10, 64)), exp, "input {inp}");
        }
    }

    #[test]
    fn empty() {
        let err = err_or_fail!(parse_uint("", 10, 64));

        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.func(), Func::ParseUint);
        assert_eq!(err.value(), 0);
    }

    #[test]
    fn rejects_sign() {
        for inp in ["-1", "+1"] {
            let err = err_or_fail!(parse_uint(inp, 10, 64));

            assert_eq!(err.kind(), ErrorKind::Syntax, "input {inp}");
        }
    }

    #[test]
    fn invalid_digits() {
        for inp in ["1x", "12 ", " 12", "1_000", "1.0", "٣"] {
            let err = err_or_fail!(parse_uint(inp, 10, 64));

            assert_eq!(err.kind(), ErrorKind::Syntax, "input {inp}");
            assert_eq!(err.num(), inp);
        }
    }

    #[test]
    fn overflow() {
        let err = err_or_fail!(parse_uint("18446744073709551616", 10, 64));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.value(), u64::MAX);
    }

    #[test]
    fn overflow_far_past_max() {
        let err = err_or_fail!(parse_uint("99999999999999999999999", 10, 64));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.value(), u64::MAX);
    }

    #[test]
    fn bit_sizes() {
        let cases = [
            ("255", 8, Ok(255)),
            ("256", 8, Err(255)),
            ("65535", 16, Ok(65535)),
            ("65536", 16, Err(65535)),
            ("4294967295", 32, Ok(4294967295)),
            ("4294967296", 32, Err(4294967295)),
        ];
        for (inp, bits, exp) in cases {
            let r = parse_uint(inp, 10, bits);
            match exp {
                Ok(v) => assert_eq!(ok_or_fail!(r), v, "input {inp}"),
                Err(v) => {
                    let err = err_or_fail!(r);
                    assert_eq!(err.kind(), ErrorKind::Range, "input {inp}");
                    assert_eq!(err.value(), v, "input {inp}");
                }
            }
        }
    }

    #[test]
    fn native_bit_size() {
        let max = usize::MAX.to_string();

        assert_eq!(ok_or_fail!(parse_uint(&max, 10, 0)), usize::MAX as u64);
    }

    #[test]
    fn base_prefixes() {
        let cases = [
            ("0x1f", 31),
            ("0X1F", 31),
            ("0b101", 5),
            ("0B101", 5),
            ("0o17", 15),
            ("0O17", 15),
            ("017", 15),
            ("0", 0),
            ("00", 0),
            ("10", 10),
        ];
        for (inp, exp) in cases {
            assert_eq!(ok_or_fail!(parse_uint(inp, 0, 64)), exp, "input {inp}");
        }
    }

    #[test]
    fn bad_base_prefixes() {
        for inp in ["0x", "0b", "0o", "08", "0b2", "0xg", "x1"] {
            let err = err_or_fail!(parse_uint(inp, 0, 64));

            assert_eq!(err.kind(), ErrorKind::Syntax, "input {inp}");
        }
    }

    #[test]
    fn explicit_base_ignores_prefix() {
        let err = err_or_fail!(parse_uint("0x1f", 16, 64));

        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn letter_digits() {
        assert_eq!(ok_or_fail!(parse_uint("ff", 16, 64)), 255);
        assert_eq!(ok_or_fail!(parse_uint("FF", 16, 64)), 255);
        assert_eq!(ok_or_fail!(parse_uint("zz", 36, 64)), 1295);
    }

    #[test]
    fn digit_outside_base() {
        for (inp, base) in [("2", 2), ("8", 8), ("a", 10), ("z", 35)] {
            let err = err_or_fail!(parse_uint(inp, base, 64));

            assert_eq!(err.kind(), ErrorKind::Syntax, "input {inp} base {base}");
        }
    }

    #[test]
    #[should_panic(expected = "invalid base: 1")]
    fn invalid_base() {
        let _ = parse_uint("1", 1, 64);
    }

    #[test]
    #[should_panic(expected = "invalid bit size: 65")]
    fn invalid_bit_size() {
        let _ = parse_uint("1", 10, 65);
    }
}

mod parse_int {
    use super::*;

    #[test]
    fn decimal() {
        let cases = [
            ("0", 0),
            ("-0", 0),
            ("+0", 0),
            ("1", 1),
            ("-1", -1),
            ("+12345", 12345),
            ("-012345", -12345),
            ("9223372036854775807", i64::MAX),
            ("-9223372036854775808", i64::MIN),
        ];
        for (inp, exp) in cases {
            assert_eq!(ok_or_fail!(parse_int(inp, 10, 64)), exp, "input {inp}");
        }
    }

    #[test]
    fn int8_boundary() {
        assert_eq!(ok_or_fail!(parse_int("127", 10, 8)), 127);
        assert_eq!(ok_or_fail!(parse_int("-128", 10, 8)), -128);

        let err = err_or_fail!(parse_int("128", 10, 8));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.func(), Func::ParseInt);
        assert_eq!(err.num(), "128");
        assert_eq!(err.value(), 127);

        let err = err_or_fail!(parse_int("-129", 10, 8));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.value(), -128);
    }

    #[test]
    fn int64_overflow() {
        let err = err_or_fail!(parse_int("9223372036854775808", 10, 64));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.value(), i64::MAX);

        let err = err_or_fail!(parse_int("-9223372036854775809", 10, 64));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.value(), i64::MIN);
    }

    #[test]
    fn overflow_past_unsigned_range() {
        let err = err_or_fail!(parse_int("-99999999999999999999999", 10, 64));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.value(), i64::MIN);
    }

    #[test]
    fn int32_boundary() {
        assert_eq!(ok_or_fail!(parse_int("2147483647", 10, 32)), 2147483647);
        assert_eq!(ok_or_fail!(parse_int("-2147483648", 10, 32)), -2147483648);

        let err = err_or_fail!(parse_int("2147483648", 10, 32));

        assert_eq!(err.value(), 2147483647);
    }

    #[test]
    fn syntax_errors() {
        for inp in ["", "-", "+", "--1", "+-1", "1-", "- 1", "0x10"] {
            let err = err_or_fail!(parse_int(inp, 10, 64));

            assert_eq!(err.kind(), ErrorKind::Syntax, "input {inp}");
            assert_eq!(err.func(), Func::ParseInt);
            assert_eq!(err.num(), inp);
            assert_eq!(err.value(), 0);
        }
    }

    #[test]
    fn signed_prefixes() {
        assert_eq!(ok_or_fail!(parse_int("-0x10", 0, 64)), -16);
        assert_eq!(ok_or_fail!(parse_int("+0b11", 0, 64)), 3);
        assert_eq!(ok_or_fail!(parse_int("-017", 0, 64)), -15);
    }

    #[test]
    fn base_alphabet_boundary() {
        assert_eq!(ok_or_fail!(parse_int("z", 36, 0)), 35);

        let err = err_or_fail!(parse_int("z", 35, 0));

        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn binary_min() {
        let inp = format!("-1{}", "0".repeat(63));

        assert_eq!(ok_or_fail!(parse_int(&inp, 2, 64)), i64::MIN);
    }
}

mod atoi {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(ok_or_fail!(atoi("42")), 42);
        assert_eq!(ok_or_fail!(atoi("-42")), -42);
        assert_eq!(ok_or_fail!(atoi(&isize::MAX.to_string())), isize::MAX);
    }

    #[test]
    fn decimal_only() {
        let err = err_or_fail!(atoi("0x10"));

        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.func(), Func::Atoi);
    }

    #[test]
    fn range() {
        let inp = format!("{}0", isize::MAX);

        let err = err_or_fail!(atoi(&inp));

        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.func(), Func::Atoi);
        assert_eq!(err.num(), inp);
        assert_eq!(err.value(), isize::MAX);
    }
}

mod format {
    use super::*;

    #[test]
    fn decimal() {
        let cases = [
            (0, "0"),
            (1, "1"),
            (-1, "-1"),
            (12345678, "12345678"),
            (-987654321, "-987654321"),
            (i64::MAX, "9223372036854775807"),
            (i64::MIN, "-9223372036854775808"),
        ];
        for (inp, exp) in cases {
            assert_eq!(format_int(inp, 10), exp);
        }
    }

    #[test]
    fn bases() {
        let cases = [
            (0, 2, "0"),
            (5, 2, "101"),
            (-8, 8, "-10"),
            (255, 16, "ff"),
            (-255, 16, "-ff"),
            (35, 36, "z"),
            (36, 36, "10"),
            (1295, 36, "zz"),
        ];
        for (inp, base, exp) in cases {
            assert_eq!(format_int(inp, base), exp, "{inp} in base {base}");
        }
    }

    #[test]
    fn min_binary() {
        let exp = format!("-1{}", "0".repeat(63));

        assert_eq!(format_int(i64::MIN, 2), exp);
    }

    #[test]
    fn unsigned() {
        assert_eq!(format_uint(u64::MAX, 10), "18446744073709551615");
        assert_eq!(format_uint(u64::MAX, 16), "ffffffffffffffff");
        assert_eq!(format_uint(u64::MAX, 36), "3w5e11264sgsf");
        assert_eq!(format_uint(u64::MAX, 2), "1".repeat(64));
    }

    #[test]
    fn itoa_values() {
        assert_eq!(itoa(0), "0");
        assert_eq!(itoa(-7), "-7");
        assert_eq!(itoa(isize::MAX), isize::MAX.to_string());
    }

    #[test]
    fn append() {
        let mut s = "x=".to_owned();

        append_int(&mut s, -42, 10);
        s.push(',');
        append_uint(&mut s, 42, 16);

        assert_eq!(s, "x=-42,2a");
    }

    #[test]
    #[should_panic(expected = "invalid base: 37")]
    fn invalid_base() {
        let _ = format_int(1, 37);
    }

    #[test]
    #[should_panic(expected = "invalid base: 0")]
    fn base_zero_not_allowed() {
        let _ = format_uint(1, 0);
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn every_base() {
        let values = [0, 1, -1, 35, -36, 1 << 40, i64::MAX, i64::MIN, -1234567890];
        for base in 2..=36 {
            for v in values {
                let s = format_int(v, base);

                assert_eq!(ok_or_fail!(parse_int(&s, base, 64)), v, "{s} base {base}");
            }
        }
    }
}
