use std::cmp::Ordering;
use std::ops::Mul;
use num_traits::One;
use crate::Gen;

pub trait MonoOrd { 
    fn cmp_lex(&self, other: &Self) -> Ordering;
    fn cmp_grlex(&self, other: &Self) -> Ordering;
}

// A monomial is the key of a polynomial term. `one()` is the empty monomial.
pub trait Mono: 
    One + 
    Mul<Output = Self> + 
    MonoOrd + 
    Gen
{
    fn total_deg(&self) -> usize;
    fn divides(&self, other: &Self) -> bool;
}
