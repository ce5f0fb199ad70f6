macro_rules! extract_or_fail {
    ($exp:expr, $variant:path) => {{
        let var = $exp;
        assert!(matches!(var, $variant(..)));
        match var {
            $variant(inner) => inner,
            _ => unreachable!(),
        }
    }};
}

macro_rules! ok_or_fail {
    ($exp:expr) => {{
        let var = $exp;
        assert!(var.is_ok(), "{var:?}");
        var.unwrap()
    }};
}

macro_rules! err_or_fail {
    ($exp:expr) => {{
        let var = $exp;
        assert!(var.is_err(), "{var:?}");
        var.unwrap_err()
    }};
}

pub(crate) use {err_or_fail, extract_or_fail, ok_or_fail};
