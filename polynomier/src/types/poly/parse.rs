use std::collections::BTreeSet;
use std::ops::Neg;
use std::str::FromStr;
use std::sync::OnceLock;
use num_traits::One;
use regex::Regex;

use crate::{Monomial, PolyError};
use crate::err::{bail, ensure};

/// A term read from human syntax such as `-3x^3y^3`.
/// 
/// `deg` is the `^n` annotation of the term (1 if there is none), 
/// `symbols` the set of variable letters, and `mono` the monomial 
/// built from each letter with its own exponent.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedTerm<R> { 
    pub deg: usize,
    pub symbols: BTreeSet<String>,
    pub coeff: R,
    pub mono: Monomial
}

fn term_regex() -> &'static Regex { 
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| 
        Regex::new(r"^([+-])?(\d+(?:\.\d+)?(?:/\d+)?)?((?:[A-Za-z](?:\^\d+)?)*)$").expect("valid pattern")
    )
}

fn symbol_regex() -> &'static Regex { 
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| 
        Regex::new(r"([A-Za-z])(?:\^(\d+))?").expect("valid pattern")
    )
}

// Splits at every sign that is not leading.
fn split_terms(s: &str) -> Vec<&str> { 
    let mut res = vec![];
    let mut start = 0;
    for (i, c) in s.char_indices() { 
        if (c == '+' || c == '-') && i > start { 
            res.push(&s[start..i]);
            start = i;
        }
    }
    res.push(&s[start..]);
    res
}

fn parse_deg(s: &str) -> Result<usize, PolyError> { 
    s.parse::<usize>().map_err(|_| PolyError::Parse(s.to_string()))
}

fn parse_term<R>(t: &str) -> Result<ParsedTerm<R>, PolyError>
where R: FromStr + Neg<Output = R> + One { 
    let err = || PolyError::Parse(t.to_string());

    let Some(c) = term_regex().captures(t) else { 
        bail!(err())
    };

    let neg = c.get(1).is_some_and(|m| m.as_str() == "-");
    let digits = c.get(2).map(|m| m.as_str());
    let body = c.get(3).map(|m| m.as_str()).unwrap_or("");

    ensure!(digits.is_some() || !body.is_empty(), err());

    let mut degs = vec![];
    let mut annots = BTreeSet::new();
    let mut symbols = BTreeSet::new();

    for cap in symbol_regex().captures_iter(body) { 
        let x = cap[1].to_string();
        let d = match cap.get(2) { 
            Some(m) => { 
                let d = parse_deg(m.as_str())?;
                annots.insert(d);
                d
            },
            None => 1
        };
        ensure!(symbols.insert(x.clone()), err());
        degs.push((x, d));
    }

    ensure!(annots.len() <= 1, err());

    let coeff = match digits { 
        Some(s) => R::from_str(s).map_err(|_| err())?,
        None => R::one()
    };
    let coeff = if neg { -coeff } else { coeff };

    let deg = annots.into_iter().next().unwrap_or(1);
    let mono = Monomial::from_iter(degs);

    Ok(ParsedTerm { deg, symbols, coeff, mono })
}

/// Reads a `±`-separated sum of terms. Whitespace is ignored.
pub fn parse_terms<R>(s: &str) -> Result<Vec<ParsedTerm<R>>, PolyError>
where R: FromStr + Neg<Output = R> + One { 
    let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    ensure!(!s.is_empty(), PolyError::Parse(s));

    split_terms(&s).into_iter().map(parse_term).collect()
}
