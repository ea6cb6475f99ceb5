use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;
use log::trace;
use num_traits::Pow;

use crate::{Ring, RingOps, PolyError, Monomial};
use crate::err::{bail, ensure};
use super::{MPoly, Poly, Univar, parse};

// Multivariate polynomials over named variables.

impl<R> MPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn variable<S>(x: S) -> Self 
    where S: Into<String> { 
        Self::from(Monomial::var(x))
    }

    pub fn mono<S, const N: usize>(degs: [(S, usize); N]) -> Monomial
    where S: Into<String> {
        Monomial::from_iter(degs)
    }

    /// The symbols appearing in some term.
    pub fn vars(&self) -> BTreeSet<String> { 
        self.iter().flat_map(|(x, _)| x.vars().cloned()).collect()
    }

    /// Replaces `x` by `p`: every term `a x^d m` becomes `a m p^d`.
    /// Substituting an absent symbol leaves `self` unchanged.
    pub fn substitute(&self, x: &str, p: &Self) -> Self { 
        let mut res = self.clone();
        let mut pows: HashMap<usize, Self> = HashMap::new();

        for (m, a) in self.iter().filter(|(m, _)| m.contains(x)) { 
            res.remove_term(m);

            let d = m.deg_for(x);
            let pd = pows.entry(d).or_insert_with(|| p.pow(d));

            trace!("{x} -> ({p}): {a}{m} -> {a}{}({pd})", m.without(x));

            let t = Self::from((m.without(x), a.clone()));
            res += t * &*pd;
        }

        res
    }

    /// Applies the substitutions one after another.
    pub fn substitute_all<'a, I>(&self, subs: I) -> Self
    where I: IntoIterator<Item = (&'a str, &'a Self)> { 
        subs.into_iter().fold(self.clone(), |res, (x, p)| 
            res.substitute(x, p)
        )
    }

    /// Formal derivative by `x`. Terms free of `x` are kept as they are. 
    /// Fails if `x` occurs in no term.
    pub fn derivative(&self, x: &str) -> Result<Self, PolyError> { 
        ensure!(
            self.iter().any(|(m, _)| m.contains(x)), 
            PolyError::SymbolNotFound(x.to_string())
        );

        let res = self.iter().map(|(m, a)| { 
            match m.lower(x) { 
                Some(m1) => {
                    let d = R::from(m.deg_for(x) as i32);
                    (m1, a * &d)
                },
                None => (m.clone(), a.clone())
            }
        }).collect();

        Ok(res)
    }

    pub fn eval(&self, values: &HashMap<String, R>) -> Result<R, PolyError> { 
        let mut res = R::zero();
        for (m, a) in self.iter() { 
            let mut t = a.clone();
            for (x, &d) in m.iter() { 
                let Some(v) = values.get(x) else { 
                    bail!(PolyError::SymbolNotFound(x.clone()))
                };
                t *= num_traits::pow(v.clone(), d);
            }
            res += t;
        }
        Ok(res)
    }

    /// Views `self` as a univariate polynomial in `x`, written `X`.
    pub fn as_univar<const X: char>(&self, x: &str) -> Result<Poly<X, R>, PolyError> { 
        self.iter().map(|(m, a)| -> Result<_, PolyError> { 
            ensure!(
                m.vars().all(|y| y == x), 
                PolyError::NotUnivariate(x.to_string())
            );
            Ok((Univar::from(m.deg_for(x)), a.clone()))
        }).collect()
    }

    /// Inverse of `as_univar`: `X` is renamed to `x`.
    pub fn from_univar<const X: char>(p: &Poly<X, R>, x: &str) -> Self { 
        p.iter().map(|(i, a)| 
            (Monomial::from_iter([(x, i.deg())]), a.clone())
        ).collect()
    }
}

impl<R> FromStr for MPoly<R>
where R: Ring + FromStr, for<'x> &'x R: RingOps<R> {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let terms = parse::parse_terms::<R>(s)?;
        Ok(terms.into_iter().map(|t| (t.mono, t.coeff)).collect())
    }
}
