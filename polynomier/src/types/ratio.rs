use std::fmt::{Display, Debug};
use std::str::FromStr;
use std::cmp::Ordering;
use std::ops::{Mul, Add, Sub, Neg, AddAssign, SubAssign, MulAssign, Div, DivAssign};
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;
use log::trace;
use crate::{Elem, EucRing, Mon, AddMon, AddGrp, AddMonOps, AddGrpOps, MonOps, RingOps, Ring, FieldOps, Field, Integer, IntOps, PolyError};
use crate::err::{bail, ensure};

/// An exact fraction `p/q`, kept in lowest terms with `q > 0`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(T, T)", into = "(T, T)"))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "T: Clone + serde::Serialize",
    deserialize = "T: Integer + serde::Deserialize<'de>, for<'x> &'x T: IntOps<T>"
)))]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    #[inline]
    const fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T> Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    /// Panics if `denom` is zero. See `try_new` for the checked form.
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        assert!(!denom.is_zero(), "zero denominator");
        Self::new_reduced(numer, denom)
    }

    pub fn try_new(numer: T, denom: T) -> Result<Ratio<T>, PolyError> {
        ensure!(!denom.is_zero(), PolyError::ZeroDenominator);
        Ok(Self::new_reduced(numer, denom))
    }

    pub fn from_numer(a: T) -> Self {
        Self::new_raw(a, T::one())
    }

    fn new_reduced(numer: T, denom: T) -> Self { 
        let mut res = Self::new_raw(numer, denom);
        res.reduce();
        res
    }

    fn reduce(&mut self) {
        if self.numer.is_zero() {
            self.denom.set_one();
            return
        }

        if self.denom.is_negative() { 
            self.numer = -&self.numer;
            self.denom = -&self.denom;
        }

        let g = EucRing::gcd(&self.numer, &self.denom);

        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }
    }

    pub fn abs(&self) -> Self {
        Self::new_raw(self.numer.abs(), self.denom.clone())
    }

    pub fn to_f64(&self) -> Option<f64> { 
        let p = self.numer.to_f64()?;
        let q = self.denom.to_f64()?;
        Some(p / q)
    }

    /// `self^e` for a rational exponent `e = p/q`: `self^|p|` (inverted when
    /// `p < 0`), then the exact `q`-th root of numerator and denominator.
    pub fn pow_ratio(&self, e: &Self) -> Result<Self, PolyError> { 
        if e.is_zero() { 
            return Ok(Self::one())
        }

        let p = e.numer.abs().to_u32().ok_or_else(|| 
            PolyError::NonIntegerExponent(e.to_string())
        )?;
        let q = e.denom.to_u32().ok_or_else(|| 
            PolyError::NonIntegerExponent(e.to_string())
        )?;

        let mut base = self.pow(p);
        if e.numer.is_negative() { 
            base = base.inv().ok_or(PolyError::ZeroDenominator)?;
        }

        if q == 1 { 
            return Ok(base)
        }

        trace!("{base}^(1/{q})");

        let root = |a: &T| -> Result<T, PolyError> { 
            if a.is_negative() && q % 2 == 0 { 
                bail!(PolyError::Irrational)
            }
            let r = a.nth_root(q);
            ensure!(num_traits::pow(r.clone(), q as usize) == *a, PolyError::Irrational);
            Ok(r)
        };

        let numer = root(&base.numer)?;
        let denom = root(&base.denom)?;
        Ok(Self::new_raw(numer, denom))
    }
}

impl<T> From<i32> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

// "p/q" or "p".
impl<T> FromStr for Ratio<T>
where T: Integer + FromStr, for<'x> &'x T: IntOps<T> {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |s: &str| -> Result<T, PolyError> { 
            s.trim().parse::<T>().map_err(|_| PolyError::NonInteger(s.trim().to_string()))
        };

        match s.split_once('/') { 
            Some((p, q)) => Self::try_new(parse(p)?, parse(q)?),
            None => Ok(Self::from_numer(parse(s)?))
        }
    }
}

impl<T> Default for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// Deserialized pairs go through `try_new`, so they come out reduced.

impl<T> TryFrom<(T, T)> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Error = PolyError;

    fn try_from(value: (T, T)) -> Result<Self, Self::Error> {
        let (numer, denom) = value;
        Self::try_new(numer, denom)
    }
}

impl<T> From<Ratio<T>> for (T, T) {
    fn from(value: Ratio<T>) -> Self {
        (value.numer, value.denom)
    }
}

impl<T> Display for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() { 
            write!(f, "{}", self.numer)
        } else { 
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Zero for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

macro_rules! impl_add_assign_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<T> $trait<&Ratio<T>> for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {
            fn $method(&mut self, rhs: &Ratio<T>) {
                if rhs.is_zero() { 
                    return
                } 
                
                if self.denom == rhs.denom { 
                    self.numer.$method(&rhs.numer);
                } else { 
                    // a/b ± c/d = (a(l/b) ± c(l/d)) / l, l = lcm(b, d).
                    let l = EucRing::lcm(&self.denom, &rhs.denom);
                    self.numer *= &l / &self.denom;
                    self.numer.$method(&(&l / &rhs.denom) * &rhs.numer);
                    self.denom = l;
                }
                self.reduce()
            }
        }
    };
}

impl_add_assign_op!(AddAssign, add_assign);
impl_add_assign_op!(SubAssign, sub_assign);

impl<T> Neg for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-self.numer, self.denom)
    }
}

impl<T> Neg for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-&self.numer, self.denom.clone())
    }
}

#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        if self.is_zero() || rhs.is_one() { 
            return
        } 
        if rhs.is_zero() { 
            self.set_zero();
            return
        }

        // (a/b)(c/d) = (a/k)(c/l) / (b/l)(d/k), k = gcd(a, d), l = gcd(b, c).
        let k = EucRing::gcd(&self.numer, &rhs.denom);
        let l = EucRing::gcd(&self.denom, &rhs.numer);
        self.numer = (&self.numer / &k) * (&rhs.numer / &l);
        self.denom = (&self.denom / &l) * (&rhs.denom / &k);
        self.reduce()
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        let Some(inv) = rhs.inv() else { 
            panic!("division by zero")
        };
        *self *= inv
    }
}

impl<T> Pow<u32> for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Ratio<T>;
    fn pow(self, n: u32) -> Self::Output {
        // already reduced, so is the power.
        Ratio::new_raw(
            num_traits::pow(self.numer.clone(), n as usize), 
            num_traits::pow(self.denom.clone(), n as usize)
        )
    }
}

impl<T> Pow<u32> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Ratio<T>;
    fn pow(self, n: u32) -> Self::Output {
        (&self).pow(n)
    }
}

macro_rules! decl_alg_ops {
    ($trait:ident) => {
        impl<T> $trait for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {}

        impl<T> $trait<Ratio<T>> for &Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {}
    };
}

decl_alg_ops!(AddMonOps);
decl_alg_ops!(AddGrpOps);
decl_alg_ops!(MonOps);
decl_alg_ops!(RingOps);
decl_alg_ops!(FieldOps);

impl<T> Elem for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn math_symbol() -> String {
        String::from("Q")
    }
}

impl<T> Mon for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> AddMon for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> AddGrp for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Ring for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() { 
            None
        } else { 
            Some(Self::new_reduced(self.denom.clone(), self.numer.clone()))
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<T> Field for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Ord for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive.
        let l = &self.numer * &other.denom;
        let r = &other.numer * &self.denom;
        l.cmp(&r)
    }
}

impl<T> PartialOrd for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests { 
    use super::*;
    use num_bigint::BigInt;

    type Q = Ratio<i64>;

    #[test]
    fn math_symbol() {
        assert_eq!(Q::math_symbol(), "Q");
    }

    #[test]
    fn constants() {
        assert_eq!(Q::zero(), Ratio::new_raw(0, 1));
        assert_eq!(Q::one(),  Ratio::new_raw(1, 1));
    }

    #[test]
    fn reduce() {
        let a = Q::new(0, -4);
        assert_eq!((a.numer, a.denom), (0, 1));

        let a = Q::new(-3, 1);
        assert_eq!((a.numer, a.denom), (-3, 1));

        let a = Q::new(1, -3);
        assert_eq!((a.numer, a.denom), (-1, 3));

        let a = Q::new(6, -8);
        assert_eq!((a.numer, a.denom), (-3, 4));

        let a = Q::new(-1, -1);
        assert_eq!((a.numer, a.denom), (1, 1));
    }

    #[test]
    fn eq() { 
        assert_eq!(Q::new(3, 9), Q::new(1, 3));
        assert_eq!(Q::new(4, 8), Q::new(1, 2));
        assert_eq!(Q::new(6, 9), Q::new(2, 3));
        assert_eq!(Q::new(-1, 2), Q::new(1, -2));
        assert_eq!(Q::new(0, 1), Q::new(0, 3));
    }

    #[test]
    fn try_new() { 
        assert_eq!(Q::try_new(2, 4), Ok(Q::new(1, 2)));
        assert_eq!(Q::try_new(1, 0), Err(PolyError::ZeroDenominator));
    }

    #[test]
    #[should_panic]
    fn new_zero_denom() { 
        let _ = Q::new(1, 0);
    }

    #[test]
    fn from_str() { 
        assert_eq!(Q::from_str("3/9"), Ok(Q::new(1, 3)));
        assert_eq!(Q::from_str("-4"), Ok(Q::from(-4)));
        assert_eq!(Q::from_str(" 1 / -2 "), Ok(Q::new(-1, 2)));
        assert_eq!(Q::from_str("1/0"), Err(PolyError::ZeroDenominator));
        assert_eq!(Q::from_str("1.1/3"), Err(PolyError::NonInteger("1.1".into())));
        assert_eq!(Q::from_str("3/1.1"), Err(PolyError::NonInteger("1.1".into())));
    }

    #[test]
    fn display() {
        assert_eq!(Q::new(-3, 1).to_string(), "-3");
        assert_eq!(Q::new(-3, 4).to_string(), "-3/4");
        assert_eq!(format!("{:?}", Q::new(6, 8)), "3/4");
    }

    #[test]
    fn add() { 
        assert_eq!(Q::new(1, 3) + Q::new(1, 2), Q::new(5, 6));
        assert_eq!(Q::new(1, 2) + Q::new(3, 5), Q::new(11, 10));
        assert_eq!(Q::new(1, 3) + Q::new(2, 3), Q::one());
        assert_eq!(Q::new(1, 6) + Q::new(1, 3), Q::new(1, 2));

        let a = Q::new(1, 2);
        let o = Q::zero();
        assert_eq!(&a + &o, a);
        assert_eq!(&o + &a, a);
    }

    #[test]
    fn sub() { 
        assert_eq!(Q::new(1, 3) - Q::new(1, 2), Q::new(-1, 6));
        assert_eq!(Q::new(1, 2) - Q::new(1, 2), Q::zero());

        let a = Q::new(1, 2);
        let o = Q::zero();
        assert_eq!(&o - &a, -a);
    }

    #[test]
    fn mul() { 
        assert_eq!(Q::new(3, 9) * Q::new(4, 8), Q::new(1, 6));
        assert_eq!(Q::new(3, 10) * Q::new(-2, 7), Q::new(-3, 35));
        assert_eq!(Q::new(3, 4) * Q::zero(), Q::zero());
        assert_eq!(Q::new(3, 4) * -Q::one(), Q::new(-3, 4));
    }

    #[test]
    fn mul_inverse() { 
        for (a, b) in [(2, 3), (-5, 7), (12, -18)] { 
            assert_eq!(Q::new(a, b) * Q::new(b, a), Q::one());
        }
    }

    #[test]
    fn div() { 
        assert_eq!(Q::new(1, 3) / Q::new(1, 2), Q::new(2, 3));
        assert_eq!(Q::new(3, 10) / Q::new(2, 7), Q::new(21, 20));
    }

    #[test]
    #[should_panic]
    fn div_by_zero() { 
        let _ = Q::one() / Q::zero();
    }

    #[test]
    fn inv() { 
        assert_eq!(Q::new(-3, 10).inv(), Some(Q::new(-10, 3)));
        assert_eq!(Q::zero().inv(), None);
    }

    #[test]
    fn pow() { 
        assert_eq!(Q::new(-2, 3).pow(3), Q::new(-8, 27));
        assert_eq!(Q::new(2, 3).pow(0), Q::one());
    }

    #[test]
    fn pow_ratio() { 
        assert_eq!(Q::from(2).pow_ratio(&Q::from(2)), Ok(Q::from(4)));
        assert_eq!(Q::from(4).pow_ratio(&Q::new(1, 2)), Ok(Q::from(2)));
        assert_eq!(Q::new(8, 27).pow_ratio(&Q::new(2, 3)), Ok(Q::new(4, 9)));
        assert_eq!(Q::new(4, 9).pow_ratio(&Q::new(-1, 2)), Ok(Q::new(3, 2)));
        assert_eq!(Q::new(5, 7).pow_ratio(&Q::zero()), Ok(Q::one()));
        assert_eq!(Q::new(-8, 1).pow_ratio(&Q::new(1, 3)), Ok(Q::from(-2)));
    }

    #[test]
    fn pow_ratio_irrational() { 
        assert_eq!(Q::from(2).pow_ratio(&Q::new(1, 2)), Err(PolyError::Irrational));
        assert_eq!(Q::new(1, 2).pow_ratio(&Q::new(1, 2)), Err(PolyError::Irrational));
        assert_eq!(Q::from(-4).pow_ratio(&Q::new(1, 2)), Err(PolyError::Irrational));
    }

    #[test]
    fn cmp() { 
        assert!(Q::new(3, 5) > Q::new(4, 7));
        assert!(Q::new(-1, 2) < Q::zero());
    }

    #[test]
    fn bigint() { 
        type R = Ratio<BigInt>;
        let a = R::new(BigInt::from(3), BigInt::from(9));
        let b = R::new(BigInt::from(4), BigInt::from(8));
        assert_eq!(a * b, R::new(BigInt::from(1), BigInt::from(6)));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() { 
        let a = Q::new(-3, 4);
        let ser = serde_json::to_string(&a).unwrap();
        let des: Q = serde_json::from_str(&ser).unwrap();
        assert_eq!(ser, "[-3,4]");
        assert_eq!(a, des);
    }

    #[test]
    fn try_from_pair() { 
        assert_eq!(Q::try_from((6, -4)), Ok(Q::new(-3, 2)));
        assert_eq!(Q::try_from((1, 0)), Err(PolyError::ZeroDenominator));
        assert_eq!(<(i64, i64)>::from(Q::new(2, 6)), (1, 3));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_reduces() { 
        let a: Q = serde_json::from_str("[2,4]").unwrap();
        assert_eq!(a, Q::new(1, 2));

        let b: Q = serde_json::from_str("[3,-6]").unwrap();
        assert_eq!(b, Q::new(-1, 2));
        assert!(b.denom().is_positive());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_zero_denom() { 
        let res = serde_json::from_str::<Q>("[1,0]");
        assert!(res.is_err());
    }
}
