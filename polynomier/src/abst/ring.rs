use std::ops::{Mul, MulAssign};
use num_traits::One;
use crate::{Elem, AddGrp, AddGrpOps};

// Multiplicative monoids and rings.

pub trait MonOps<T = Self>: 
    Sized + 
    Mul<T, Output = T> + 
    for<'a> Mul<&'a T, Output = T> 
{}

pub trait Mon: 
    Elem + 
    One +
    MonOps + 
    MulAssign + 
    for<'a> MulAssign<&'a Self>
where
    for<'a> &'a Self: MonOps<Self>
{
    /// Product of the items, `1` when empty.
    fn product<A, I>(itr: I) -> Self 
    where 
        Self: MulAssign<A>,
        I: IntoIterator<Item = A> 
    { 
        let mut res = Self::one();
        for a in itr { 
            res *= a;
        }
        res
    }
}

pub trait RingOps<T = Self>: 
    AddGrpOps<T> + 
    MonOps<T>
{}

pub trait Ring: 
    AddGrp + 
    Mon + 
    RingOps + 
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{
    fn inv(&self) -> Option<Self>;
    fn is_unit(&self) -> bool;
    fn normalizing_unit(&self) -> Self;

    fn is_pm_one(&self) -> bool { 
        self.is_one() || (-self).is_one()
    }

    // Whether elements are plain real numbers, so that a sign can be read
    // off their printed form. Polynomials over other rings render raw.
    fn is_real() -> bool { 
        true
    }
}
