use std::fmt::Display;

const SUPERSCRIPTS: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', 
    '\u{2075}', '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}'
];

pub fn superscript(i: usize) -> String {
    i.to_string().bytes().map(|b| SUPERSCRIPTS[(b - b'0') as usize]).collect()
}

// `x^d`, with the exponent omitted when `d == 1`.
pub fn fmt_pow<S>(x: S, d: usize) -> String 
where S: Display { 
    if d == 1 { 
        x.to_string()
    } else { 
        format!("{x}{}", superscript(d))
    }
}

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

/// Renders a sequence of `(monomial, coefficient)` pairs as a signed sum, 
/// e.g. `3x² - y + 1`. A monomial rendering as `"1"` is the constant term.
/// Coefficients `±1` are omitted except on the constant term.
pub fn lc<X, R, S>(terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: IntoIterator<Item = (X, R)>
{ 
    let mut res = String::new();

    for (i, (x, r)) in terms.into_iter().enumerate() {
        let r = paren_expr(r);
        let x = x.to_string();

        let (neg, r) = match r.strip_prefix('-') { 
            Some(r) => (true, r.to_string()),
            None    => (false, r)
        };

        let term = if x == "1" {
            r
        } else if r == "1" { 
            x
        } else { 
            format!("{r}{x}")
        };

        match (i, neg) { 
            (0, false) => {},
            (0, true)  => res.push('-'),
            (_, false) => res.push_str(" + "),
            (_, true)  => res.push_str(" - "),
        }
        res.push_str(&term);
    }

    if res.is_empty() { 
        res.push('0');
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript() { 
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(1234567890), "¹²³⁴⁵⁶⁷⁸⁹⁰");
    }

    #[test]
    fn test_fmt_pow() { 
        assert_eq!(fmt_pow("x", 1), "x");
        assert_eq!(fmt_pow("x", 3), "x³");
    }

    #[test]
    fn test_lc() { 
        let terms = [("x²", 3), ("y", -1), ("1", 1)];
        assert_eq!(lc(terms), "3x² - y + 1");

        let terms = [("x", -1), ("1", -2)];
        assert_eq!(lc(terms), "-x - 2");

        let terms: [(&str, i32); 0] = [];
        assert_eq!(lc(terms), "0");
    }

    #[test]
    fn test_lc_paren() { 
        let terms = [("x", "1 + i"), ("1", "2")];
        assert_eq!(lc(terms), "(1 + i)x + 2");
    }
}
