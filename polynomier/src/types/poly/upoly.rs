use std::ops::{Div, Rem, DivAssign, RemAssign};
use std::str::FromStr;
use auto_impl_ops::auto_ops;
use log::{debug, trace};
use num_traits::Zero;

use crate::{Ring, RingOps, Field, FieldOps, PolyError};
use super::{Poly, MPoly, Univar};

// Univariate polynomials R[X], keyed by exponent.

impl<const X: char, R> Poly<X, R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn variable() -> Self { 
        Self::from(Self::mono(1))
    }

    pub fn mono(i: usize) -> Univar<X> {
        Univar::from(i)
    }

    /// From dense coefficients `[a_0, a_1, ...]`, i.e. `a_0 + a_1 X + ...`.
    pub fn from_coeffs<I>(coeffs: I) -> Self
    where I: IntoIterator<Item = R> { 
        coeffs.into_iter().enumerate().map(|(i, a)| (Self::mono(i), a)).collect()
    }

    /// The highest exponent with a non-zero coefficient. 
    /// Undefined for the zero polynomial.
    pub fn degree(&self) -> Result<usize, PolyError> { 
        self.iter().map(|(x, _)| x.deg()).max().ok_or(PolyError::UndefinedDegree)
    }

    pub fn lead_coeff(&self) -> Option<&R> { 
        self.lead_term().map(|(_, a)| a)
    }

    pub fn eval(&self, x: &R) -> R { 
        R::sum(self.iter().map(|(i, a)| 
            a * &num_traits::pow(x.clone(), i.deg())
        ))
    }

    pub fn is_root(&self, x: &R) -> bool { 
        self.eval(x).is_zero()
    }
}

impl<const X: char, R> Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    /// Long division: `(q, r)` with `self = rhs * q + r` and `deg r < deg rhs`.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), PolyError> { 
        let Some((j, b)) = rhs.lead_term() else { 
            return Err(PolyError::ZeroDivisor)
        };

        let mut q = Self::zero();
        let mut r = self.clone();

        while let Some((i, a)) = r.lead_term() { 
            if i.deg() < j.deg() { 
                break
            }

            let i = *i;
            let k = i.deg() - j.deg();
            let c = a / b;                   // (a/b) X^{i-j}.

            trace!("quotient term: {c} {X}^{k}");

            let t = Self::from((Self::mono(k), c));
            r -= &t * rhs;
            r.remove_term(&i);               // cancelled, also for inexact R.
            q += t;
        }

        debug!("({self}) = ({rhs})({q}) + ({r})");

        Ok((q, r))
    }

    /// Quotient plus remainder of `self / rhs`.
    pub fn true_div(&self, rhs: &Self) -> Result<Self, PolyError> { 
        let (q, r) = self.div_rem(rhs)?;
        Ok(q + r)
    }
}

// Panic on the zero divisor. Use `div_rem` for the checked form.

#[auto_ops]
impl<const X: char, R> Div for &Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = Poly<X, R>;

    fn div(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) { 
            Ok((q, _)) => q,
            Err(e) => panic!("{e}")
        }
    }
}

#[auto_ops]
impl<const X: char, R> Rem for &Poly<X, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    type Output = Poly<X, R>;

    fn rem(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) { 
            Ok((_, r)) => r,
            Err(e) => panic!("{e}")
        }
    }
}

impl<const X: char, R> FromStr for Poly<X, R>
where R: Ring + FromStr, for<'x> &'x R: RingOps<R> {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p = MPoly::<R>::from_str(s)?;
        p.as_univar(&X.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ratio;

    #[test]
    fn from_coeffs() { 
        type P = Poly<'x', i32>;

        assert_eq!(P::from_coeffs([0, 0, 1]).to_string(), "x²");
        assert_eq!(P::from_coeffs([1, 0, 2]).to_string(), "2x² + 1");
        assert_eq!(P::from_coeffs([-1, 1]).to_string(), "x - 1");
        assert_eq!(P::from_coeffs([0, 0]), P::zero());
    }

    #[test]
    fn degree() { 
        type P = Poly<'x', i32>;

        assert_eq!(P::from_coeffs([1, 0, 2]).degree(), Ok(2));
        assert_eq!(P::from_coeffs([5]).degree(), Ok(0));
        assert_eq!(P::from_coeffs([1, 2, 0]).degree(), Ok(1));
        assert_eq!(P::zero().degree(), Err(PolyError::UndefinedDegree));
    }

    #[test]
    fn lead_coeff() { 
        type P = Poly<'x', i32>;
        assert_eq!(P::from_coeffs([1, 0, -2]).lead_coeff(), Some(&-2));
        assert_eq!(P::zero().lead_coeff(), None);
    }

    #[test]
    fn eval() { 
        type P = Poly<'x', i32>;

        let f = P::from_coeffs([-1, 0, 1]); // x² - 1
        assert_eq!(f.eval(&3), 8);
        assert!(f.is_root(&1));
        assert!(f.is_root(&-1));
        assert!(!f.is_root(&0));
    }

    #[test]
    fn div_rem() { 
        type R = Ratio<i64>;
        type P = Poly<'x', R>;

        let f = P::from_coeffs([1, 3, 3, 1].map(R::from)); // (x + 1)³
        let g = P::from_coeffs([1, 1].map(R::from));
        let (q, r) = f.div_rem(&g).unwrap();

        assert_eq!(q, P::from_coeffs([1, 2, 1].map(R::from)));
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_fraction() { 
        type R = Ratio<i64>;
        type P = Poly<'x', R>;

        let f = P::from_coeffs([1, 2, 1].map(R::from));
        let g = P::from_coeffs([3, 2].map(R::from));
        let (q, r) = f.div_rem(&g).unwrap();

        assert_eq!(q, P::from_coeffs([R::new(1, 4), R::new(1, 2)]));
        assert_eq!(r, P::from_const(R::new(1, 4)));
        assert_eq!(f, &g * &q + &r);
    }

    #[test]
    fn div_rem_low_degree() { 
        type R = Ratio<i64>;
        type P = Poly<'x', R>;

        let f = P::from_coeffs([3, 2].map(R::from));
        let g = P::from_coeffs([1, 2, 1].map(R::from));
        let (q, r) = f.div_rem(&g).unwrap();

        assert_eq!(q, P::zero());
        assert_eq!(r, f);
    }

    #[test]
    fn div_rem_zero() { 
        type P = Poly<'x', f64>;

        let f = P::from_coeffs([1.0, 2.0]);
        assert_eq!(f.div_rem(&P::zero()), Err(PolyError::ZeroDivisor));
        assert_eq!(P::zero().div_rem(&f), Ok((P::zero(), P::zero())));
    }

    #[test]
    #[should_panic]
    fn div_op_zero() { 
        type P = Poly<'x', f64>;
        let _ = P::variable() / P::zero();
    }

    #[test]
    fn div_rem_ops() { 
        type P = Poly<'x', f64>;

        // x² + 2x + 1 = (x + 3)(x - 1) + 4
        let f = P::from_coeffs([1.0, 2.0, 1.0]);
        let g = P::from_coeffs([-1.0, 1.0]);

        assert_eq!(&f / &g, P::from_coeffs([3.0, 1.0]));
        assert_eq!(&f % &g, P::from_const(4.0));
        assert_eq!(f.true_div(&g), Ok(P::from_coeffs([7.0, 1.0])));
    }

    #[test]
    fn from_str() { 
        type P = Poly<'x', i64>;

        assert_eq!(P::from_str("x^2 - 2x + 1"), Ok(P::from_coeffs([1, -2, 1])));
        assert_eq!(P::from_str("-3"), Ok(P::from_const(-3)));
        assert_eq!(P::from_str("y + 1"), Err(PolyError::NotUnivariate("x".into())));
    }
}
