use std::fmt::{Display, Debug};
use std::ops::{Add, Neg, Sub, Mul, AddAssign, SubAssign, MulAssign};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps, Integer, IntOps};

/// Gaussian integers `a + bi`. 
/// 
/// These are not plain real numbers, so polynomials over them render as a 
/// structural dump of their terms.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussInt<I>(I, I)
where I: Integer, for<'x> &'x I: IntOps<I>;

impl<I> GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    pub fn new(a: I, b: I) -> Self { 
        Self(a, b)
    }

    pub fn i() -> Self { 
        Self(I::zero(), I::one())
    }

    pub fn re(&self) -> &I { 
        &self.0
    }

    pub fn im(&self) -> &I { 
        &self.1
    }

    pub fn conj(&self) -> Self { 
        Self(self.0.clone(), -&self.1)
    }

    pub fn norm(&self) -> I {
        let (a, b) = (&self.0, &self.1);
        a * a + b * b
    }
}

impl<I> From<i32> for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn from(a: i32) -> Self {
        Self(I::from(a), I::zero())
    }
}

impl<I> Display for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = (&self.0, &self.1);

        let bi = if b.is_one() { 
            String::from("i")
        } else if (-b).is_one() { 
            String::from("-i")
        } else { 
            format!("{b}i")
        };

        if b.is_zero() { 
            write!(f, "{a}")
        } else if a.is_zero() { 
            write!(f, "{bi}")
        } else if let Some(bi) = bi.strip_prefix('-') {
            write!(f, "{a} - {bi}")
        } else { 
            write!(f, "{a} + {bi}")
        }
    }
}

impl<I> Debug for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<I> Zero for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn zero() -> Self {
        Self(I::zero(), I::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero() && self.1.is_zero()
    }
}

impl<I> One for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn one() -> Self {
        Self(I::one(), I::zero())
    }

    fn is_one(&self) -> bool {
        self.0.is_one() && self.1.is_zero()
    }
}

impl<I> Neg for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0, -self.1)
    }
}

impl<I> Neg for &GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = GaussInt<I>;
    fn neg(self) -> Self::Output {
        GaussInt(-&self.0, -&self.1)
    }
}

macro_rules! impl_add_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<I> $trait<&GaussInt<I>> for GaussInt<I>
        where I: Integer, for<'x> &'x I: IntOps<I> {
            fn $method(&mut self, rhs: &GaussInt<I>) {
                self.0.$method(&rhs.0);
                self.1.$method(&rhs.1);
            }
        }
    };
}

impl_add_op!(AddAssign, add_assign);
impl_add_op!(SubAssign, sub_assign);

#[auto_ops]
impl<I> MulAssign<&GaussInt<I>> for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn mul_assign(&mut self, rhs: &GaussInt<I>) {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i.
        let (a, b) = (&self.0, &self.1);
        let (c, d) = (&rhs.0, &rhs.1);
        let res = GaussInt(a * c - b * d, a * d + b * c);
        *self = res
    }
}

macro_rules! decl_alg_ops {
    ($trait:ident) => {
        impl<I> $trait for GaussInt<I>
        where I: Integer, for<'x> &'x I: IntOps<I> {}

        impl<I> $trait<GaussInt<I>> for &GaussInt<I>
        where I: Integer, for<'x> &'x I: IntOps<I> {}
    };
}

decl_alg_ops!(AddMonOps);
decl_alg_ops!(AddGrpOps);
decl_alg_ops!(MonOps);
decl_alg_ops!(RingOps);

impl<I> Elem for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn math_symbol() -> String {
        String::from("Z[i]")
    }
}

impl<I> AddMon for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {}

impl<I> AddGrp for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {}

impl<I> Mon for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {}

impl<I> Ring for GaussInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn inv(&self) -> Option<Self> {
        // units are ±1, ±i.
        if self.is_unit() { 
            Some(self.conj())
        } else { 
            None
        }
    }

    fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    fn normalizing_unit(&self) -> Self {
        Self::one()
    }

    fn is_real() -> bool { 
        false
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    type G = GaussInt<i64>;

    #[test]
    fn display() { 
        assert_eq!(G::new(1, 2).to_string(), "1 + 2i");
        assert_eq!(G::new(1, -2).to_string(), "1 - 2i");
        assert_eq!(G::new(0, 1).to_string(), "i");
        assert_eq!(G::new(0, -1).to_string(), "-i");
        assert_eq!(G::new(3, 0).to_string(), "3");
        assert_eq!(G::new(-3, -1).to_string(), "-3 - i");
    }

    #[test]
    fn add_sub() { 
        let a = G::new(1, 2);
        let b = G::new(3, -5);
        assert_eq!(&a + &b, G::new(4, -3));
        assert_eq!(&a - &b, G::new(-2, 7));
        assert_eq!(-a, G::new(-1, -2));
    }

    #[test]
    fn mul() { 
        let a = G::new(1, 2);
        let b = G::new(3, -5);
        assert_eq!(a * b, G::new(13, 1));
        assert_eq!(G::i() * G::i(), G::from(-1));
    }

    #[test]
    fn conj_norm() { 
        let a = G::new(3, -4);
        assert_eq!(a.conj(), G::new(3, 4));
        assert_eq!(a.norm(), 25);
        assert_eq!(&a * &a.conj(), G::from(25));
    }

    #[test]
    fn inv() { 
        assert_eq!(G::i().inv(), Some(G::new(0, -1)));
        assert_eq!(G::new(1, 1).inv(), None);
    }

    #[test]
    fn not_real() { 
        assert!(!G::is_real());
        assert!(i64::is_real());
    }
}
