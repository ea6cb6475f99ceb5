use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use num_traits::Zero;
use crate::Elem;

// Additive structures. The `*Ops` traits collect the operator impls a type
// needs by value and by reference, so that generic code can write `&a + &b`.

pub trait AddMonOps<T = Self>: 
    Sized + 
    Add<T, Output = T> + 
    for<'a> Add<&'a T, Output = T>
{}

pub trait AddMon: 
    Elem + 
    Zero +
    AddMonOps + 
    AddAssign + 
    for<'a> AddAssign<&'a Self>
where 
    for<'a> &'a Self: AddMonOps<Self>
{
    /// Sum of the items, `0` when empty.
    fn sum<A, I>(itr: I) -> Self 
    where 
        Self: AddAssign<A>,
        I: IntoIterator<Item = A> 
    { 
        let mut res = Self::zero();
        for a in itr { 
            res += a;
        }
        res
    }
}

pub trait AddGrpOps<T = Self>: 
    AddMonOps<T> + 
    Neg<Output = T> + 
    Sub<T, Output = T> +
    for<'a> Sub<&'a T, Output = T> 
{}

pub trait AddGrp: 
    AddMon + 
    AddGrpOps + 
    SubAssign + 
    for<'a> SubAssign<&'a Self>
where 
    for<'a> &'a Self: AddGrpOps<Self>
{}
