use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use delegate::delegate;
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps, PolyError};
use crate::{Terms, Monomial};
use crate::err::ensure;
use super::{Mono, Univar};

// A polynomial is a term mapping from monomials to R.

pub type MPoly<R> = PolyBase<Monomial, R>;
pub type Poly<const X: char, R> = PolyBase<Univar<X>, R>;

#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "X: serde::Serialize, R: serde::Serialize",
    deserialize = "X: serde::Deserialize<'de>, R: serde::Deserialize<'de>"
)))]
pub struct PolyBase<X, R>
where 
    X: Mono, 
    R: Ring, for<'x> &'x R: RingOps<R>
{
    data: Terms<X, R>
}

impl<X, R> PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn new(mut data: Terms<X, R>) -> Self { 
        data.clean();
        Self { data }
    }

    pub fn from_const(r: R) -> Self {
        Self::from((X::one(), r))
    }

    delegate! { 
        to self.data {
            pub fn nterms(&self) -> usize;
            pub fn coeff(&self, x: &X) -> &R;
            pub fn iter(&self) -> impl Iterator<Item = (&X, &R)>;
        }
    }

    pub fn is_const(&self) -> bool { 
        self.iter().all(|(x, _)| x.is_one())
    }

    pub fn const_term(&self) -> &R { 
        self.coeff(&X::one())
    }

    /// The term of the highest monomial in graded-lex order.
    pub fn lead_term(&self) -> Option<(&X, &R)> { 
        self.iter().max_by(|t1, t2| X::cmp_grlex(t1.0, t2.0))
    }

    pub fn total_deg(&self) -> Option<usize> { 
        self.iter().map(|(x, _)| x.total_deg()).max()
    }

    pub fn map_coeffs<R2, F>(&self, f: F) -> PolyBase<X, R2>
    where 
        R2: Ring, for<'x> &'x R2: RingOps<R2>, 
        F: Fn(&R) -> R2
    {
        PolyBase::new(self.data.map_coeffs(f))
    }

    /// Terms in rendering order: descending total degree, ties broken 
    /// by descending lex order.
    pub fn sorted_terms(&self) -> impl Iterator<Item = (&X, &R)> { 
        self.data.sort_terms_by(|x, y| X::cmp_grlex(x, y).reverse())
    }

    /// Structural dump of the term mapping, e.g. `{{x: 2}: 3, {}: -1}`.
    pub fn to_raw_string(&self) -> String { 
        use itertools::Itertools;
        let entries = self.sorted_terms().map(|(x, r)| 
            format!("{x:?}: {r}")
        ).join(", ");
        format!("{{{entries}}}")
    }

    // drops the term at `x` without touching the others.
    pub(crate) fn remove_term(&mut self, x: &X) -> Option<R> { 
        self.data.remove(x)
    }

    /// `self^n` for a signed exponent; negative exponents are rejected.
    pub fn try_pow(&self, n: i64) -> Result<Self, PolyError> { 
        ensure!(n >= 0, PolyError::NegativeExponent(n));
        Ok(self.pow(n as u64))
    }
}

impl<X, R> From<X> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(x: X) -> Self {
        Self::from((x, R::one()))
    }
}

impl<X, R> From<(X, R)> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(pair: (X, R)) -> Self {
        Self::new(Terms::from(pair))
    }
}

impl<X, R> FromIterator<(X, R)> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from_iter<T: IntoIterator<Item = (X, R)>>(iter: T) -> Self {
        Self::new(Terms::from_iter(iter))
    }
}

impl<X, R> From<Terms<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(data: Terms<X, R>) -> Self {
        Self::new(data)
    }
}

impl<X, R> IntoIterator for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = (X, R);
    type IntoIter = std::collections::hash_map::IntoIter<X, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

// Falls back to the structural dump when the coefficients are not plain 
// real numbers.
impl<X, R> Display for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::util::format::lc;

        if R::is_real() { 
            f.write_str(&lc(self.sorted_terms()))
        } else { 
            f.write_str(&self.to_raw_string())
        }
    }
}

impl<X, R> Debug for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<X, R> Zero for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Self::new(Terms::zero())
    }

    fn is_zero(&self) -> bool {
        self.data.is_zero()
    }
}

impl<X, R> One for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.is_const() && self.const_term().is_one()
    }
}

impl<X, R> Neg for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.data)
    }
}

impl<X, R> Neg for &PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = PolyBase<X, R>;
    fn neg(self) -> Self::Output {
        PolyBase::new(-&self.data)
    }
}

#[auto_ops]
impl<X, R> AddAssign<&PolyBase<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &Self) {
        self.data += &rhs.data
    }
}

#[auto_ops]
impl<X, R> SubAssign<&PolyBase<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.data -= &rhs.data
    }
}

#[auto_ops]
impl<X, R> MulAssign<&PolyBase<X, R>> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &Self) {
        if rhs.is_const() { 
            *self *= rhs.const_term()
        } else if self.is_const() { 
            let c = self.const_term().clone();
            *self = rhs * &c
        } else { 
            self.data = &self.data * &rhs.data
        }
    }
}

// Scalars are promoted to constant polynomials.

#[auto_ops]
impl<X, R> AddAssign<&R> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &R) {
        *self += Self::from_const(rhs.clone())
    }
}

#[auto_ops]
impl<X, R> SubAssign<&R> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &R) {
        *self -= Self::from_const(rhs.clone())
    }
}

#[auto_ops]
impl<X, R> MulAssign<&R> for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        self.data *= rhs
    }
}

// Exponentiation by squaring.
macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl<X, R> Pow<$t> for &PolyBase<X, R>
        where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = PolyBase<X, R>;
            fn pow(self, n: $t) -> Self::Output {
                let mut res = PolyBase::one();
                let mut base = self.clone();
                let mut n = n;

                while n > 0 { 
                    if n & 1 == 1 { 
                        res *= &base;
                    }
                    n >>= 1;
                    if n > 0 { 
                        base = &base * &base;
                    }
                }
                res
            }
        }

        impl<X, R> Pow<$t> for PolyBase<X, R>
        where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = PolyBase<X, R>;
            fn pow(self, n: $t) -> Self::Output {
                (&self).pow(n)
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(u64);
impl_pow_unsigned!(usize);

macro_rules! impl_alg_op {
    ($trait:ident) => {
        impl<X, R> $trait<Self> for PolyBase<X, R>
        where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<X, R> $trait<PolyBase<X, R>> for &PolyBase<X, R>
        where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}
    };
}

impl_alg_op!(AddMonOps);
impl_alg_op!(AddGrpOps);
impl_alg_op!(MonOps);

impl<X, R> Elem for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {
    fn math_symbol() -> String {
        format!("{}[{}]", R::math_symbol(), X::math_symbol())
    }
}

impl<X, R> AddMon for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> AddGrp for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}

impl<X, R> Mon for PolyBase<X, R>
where X: Mono, R: Ring, for<'x> &'x R: RingOps<R> {}
