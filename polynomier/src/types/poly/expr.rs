use std::fmt::Display;
use itertools::Itertools;
use num_traits::{One, Pow};

use crate::{AddMon, Mon, Ring, RingOps, Monomial};
use crate::util::format::paren_expr;
use super::MPoly;

/// A plain sum-of-products expression tree. With the `expr` feature it is
/// the intermediate step to and from symbolica atoms.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr<R> { 
    Const(R),
    Var(String),
    Pow(Box<Expr<R>>, usize),
    Mul(Vec<Expr<R>>),
    Add(Vec<Expr<R>>),
}

impl<R> Expr<R> { 
    pub fn var<S>(x: S) -> Self
    where S: Into<String> { 
        Expr::Var(x.into())
    }

    pub fn boxed(self) -> Box<Self> { 
        Box::new(self)
    }

    fn is_atom(&self) -> bool { 
        matches!(self, Expr::Const(_) | Expr::Var(_))
    }
}

impl<R> Display for Expr<R>
where R: Display { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { 
            Expr::Const(a) => write!(f, "{}", paren_expr(a)),
            Expr::Var(x) => write!(f, "{x}"),
            Expr::Pow(b, d) if b.is_atom() => write!(f, "{b}^{d}"),
            Expr::Pow(b, d) => write!(f, "({b})^{d}"),
            Expr::Mul(es) => { 
                let s = es.iter().map(|e| 
                    if let Expr::Add(_) = e { format!("({e})") } else { e.to_string() }
                ).join(" * ");
                write!(f, "{s}")
            },
            Expr::Add(es) => write!(f, "{}", es.iter().join(" + ")),
        }
    }
}

impl<R> MPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// Converts to an expression tree, terms in rendering order.
    pub fn to_expr(&self) -> Expr<R> { 
        let mut terms = self.sorted_terms().map(|(m, a)| 
            mono_expr(m, a)
        ).collect_vec();

        match terms.len() { 
            0 => Expr::Const(R::zero()),
            1 => terms.remove(0),
            _ => Expr::Add(terms)
        }
    }
}

fn mono_expr<R>(m: &Monomial, a: &R) -> Expr<R>
where R: Ring, for<'x> &'x R: RingOps<R> { 
    let mut factors = vec![];
    if !a.is_one() || m.is_one() { 
        factors.push(Expr::Const(a.clone()));
    }
    for (x, &d) in m.iter() { 
        let e = Expr::var(x);
        factors.push(if d == 1 { e } else { Expr::Pow(e.boxed(), d) });
    }

    if factors.len() == 1 { 
        factors.remove(0)
    } else { 
        Expr::Mul(factors)
    }
}

impl<R> From<&Expr<R>> for MPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(e: &Expr<R>) -> Self {
        match e { 
            Expr::Const(a) => Self::from_const(a.clone()),
            Expr::Var(x) => Self::variable(x.as_str()),
            Expr::Pow(b, d) => Self::from(b.as_ref()).pow(*d),
            Expr::Mul(es) => Self::product(es.iter().map(Self::from)),
            Expr::Add(es) => Self::sum(es.iter().map(Self::from)),
        }
    }
}

impl<R> From<Expr<R>> for MPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(e: Expr<R>) -> Self {
        Self::from(&e)
    }
}
