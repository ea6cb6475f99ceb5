use std::ops::{Div, DivAssign};
use crate::{Ring, RingOps};

// Fields. Only exact division is required here: integers are not fields,
// while rationals and reals are.

pub trait FieldOps<T = Self>: 
    RingOps<T> + 
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

pub trait Field: 
    Ring + 
    FieldOps + 
    DivAssign +
    for<'a> DivAssign<&'a Self>
where 
    for<'a> &'a Self: FieldOps<Self> 
{}
