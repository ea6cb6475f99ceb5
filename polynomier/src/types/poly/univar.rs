use std::cmp::Ordering;
use std::fmt::{Display, Debug};
use std::ops::{Mul, MulAssign};
use auto_impl_ops::auto_ops;
use num_traits::One;

use crate::{Elem, Gen};
use crate::util::format::fmt_pow;
use super::{Mono, MonoOrd};

// `Univar<X>` : the monomial X^d, keyed by its degree alone.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Univar<const X: char>(
    pub(crate) usize
);

impl<const X: char> Univar<X> {
    pub fn var_symbol() -> char { 
        X
    }

    pub fn deg(&self) -> usize { 
        self.0
    }
}

impl<const X: char> From<usize> for Univar<X> {
    fn from(d: usize) -> Self {
        Self(d)
    }
}

impl<const X: char> One for Univar<X> {
    fn one() -> Self {
        Self(0) // x^0 = 1.
    }

    fn is_one(&self) -> bool { 
        self.0 == 0
    }
}

#[auto_ops]
impl<const X: char> MulAssign<&Univar<X>> for Univar<X> {
    fn mul_assign(&mut self, rhs: &Univar<X>) {
        self.0 += rhs.0 // x^i * x^j = x^{i+j}
    }
}

impl<const X: char> MonoOrd for Univar<X> {
    fn cmp_lex(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn cmp_grlex(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const X: char> Mono for Univar<X> {
    fn total_deg(&self) -> usize {
        self.0
    }

    fn divides(&self, other: &Self) -> bool { 
        self.0 <= other.0
    }
}

impl<const X: char> Display for Univar<X> { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 { 
            f.write_str("1")
        } else { 
            f.write_str(&fmt_pow(X, self.0))
        }
    }
}

impl<const X: char> Debug for Univar<X> { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const X: char> Elem for Univar<X> { 
    fn math_symbol() -> String {
        format!("{X}")
    }
}

impl<const X: char> Gen for Univar<X> {}
