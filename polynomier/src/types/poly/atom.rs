use std::fmt::Display;
use std::str::FromStr;
use itertools::Itertools;
use log::trace;
use symbolica::atom::{Atom, AtomView};
use symbolica::try_parse;

use crate::{Ring, RingOps, PolyError};
use super::{Expr, MPoly};

// Bridge to symbolica atoms, through `Expr`.

impl<R> MPoly<R>
where R: Ring + Display, for<'x> &'x R: RingOps<R> {
    /// Builds the atom by handing symbolica a fully parenthesized
    /// sum-of-products. Variables land in this crate's namespace.
    pub fn to_atom(&self) -> Result<Atom, PolyError> {
        let text = atom_text(&self.to_expr());
        trace!("to_atom: {text}");

        try_parse!(text.as_str()).map_err(|_| PolyError::Parse(text))
    }
}

impl<R> MPoly<R>
where R: Ring + FromStr, for<'x> &'x R: RingOps<R> {
    /// Reads a polynomial back from an atom. Numbers must parse as `R`,
    /// exponents must be natural numbers and functions are rejected.
    pub fn from_atom(a: &Atom) -> Result<Self, PolyError> {
        let e = view_expr::<R>(a.as_view())?;
        Ok(Self::from(e))
    }
}

fn atom_text<R>(e: &Expr<R>) -> String
where R: Display {
    match e {
        Expr::Const(a) => format!("({a})"),
        Expr::Var(x) => x.clone(),
        Expr::Pow(b, d) => format!("({})^{d}", atom_text(b)),
        Expr::Mul(es) => es.iter().map(|e| format!("({})", atom_text(e))).join("*"),
        Expr::Add(es) => es.iter().map(|e| format!("({})", atom_text(e))).join("+"),
    }
}

fn view_expr<R>(v: AtomView<'_>) -> Result<Expr<R>, PolyError>
where R: FromStr {
    match v {
        AtomView::Num(_) => {
            let s = v.to_string();
            R::from_str(&s).map(Expr::Const).map_err(|_| PolyError::Parse(s))
        },
        AtomView::Var(x) => {
            let sym = x.get_symbol();
            let name = sym.get_name();
            let name = name.rsplit("::").next().unwrap_or(name);
            Ok(Expr::var(name))
        },
        AtomView::Pow(p) => {
            let (b, e) = p.get_base_exp();
            let s = e.to_string();
            let Ok(d) = s.parse::<usize>() else {
                return Err(PolyError::NonIntegerExponent(s))
            };
            Ok(Expr::Pow(view_expr(b)?.boxed(), d))
        },
        AtomView::Mul(m) => {
            let es = m.iter().map(view_expr::<R>).try_collect()?;
            Ok(Expr::Mul(es))
        },
        AtomView::Add(a) => {
            let es = a.iter().map(view_expr::<R>).try_collect()?;
            Ok(Expr::Add(es))
        },
        AtomView::Fun(_) => Err(PolyError::Parse(v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{Zero, Pow};
    use crate::Ratio;

    type P = MPoly<i64>;
    type Q = MPoly<Ratio<i64>>;

    fn atom(s: &str) -> Atom {
        try_parse!(s).unwrap()
    }

    #[test]
    fn to_atom() {
        let x = P::variable("x");
        let y = P::variable("y");
        let f = &x * &x * 3 + &y - 1;
        assert_eq!(f.to_atom().unwrap(), atom("3*x^2 + y - 1"));
        assert_eq!(P::zero().to_atom().unwrap(), atom("0"));
    }

    #[test]
    fn from_atom() {
        let f = P::from_atom(&atom("x^2*y - 4*y + 7")).unwrap();
        assert_eq!(f.to_string(), "x²y - 4y + 7");
    }

    #[test]
    fn from_atom_expands() {
        let f = P::from_atom(&atom("(x + 1)^2*y")).unwrap();
        assert_eq!(f.to_string(), "x²y + 2xy + y");
    }

    #[test]
    fn from_atom_ratio() {
        let f = Q::from_atom(&atom("x/2 - 2/3")).unwrap();
        let x = Q::variable("x");
        assert_eq!(f, &x * Ratio::new(1, 2) - Ratio::new(2, 3));
    }

    #[test]
    fn from_atom_err() {
        assert!(P::from_atom(&atom("x/2")).is_err());
        assert!(matches!(P::from_atom(&atom("x^(-1)")), Err(PolyError::NonIntegerExponent(_))));
        assert!(P::from_atom(&atom("sin(x)")).is_err());
    }

    #[test]
    fn round_trip() {
        let x = Q::variable("x");
        let y = Q::variable("y");
        let f = (&x - &y * Ratio::new(1, 2)).pow(3u32) + Ratio::new(2, 3);

        let a = f.to_atom().unwrap();
        assert_eq!(Q::from_atom(&a).unwrap(), f);
    }
}
