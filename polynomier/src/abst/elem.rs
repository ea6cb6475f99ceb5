use std::fmt::{Debug, Display};

// `Eq` is not required: real and complex-like coefficients only compare partially.

pub trait ElemBase: 
    Default + 
    PartialEq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> ElemBase for T where T: 
    Default + 
    PartialEq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

pub trait Elem: ElemBase { 
    fn math_symbol() -> String;
}
