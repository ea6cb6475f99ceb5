use num_traits::{Zero, One};
use crate::*;

// Real coefficients. Equality is exact, so only values that are built
// exactly (small integers, dyadic fractions, ...) cancel reliably.

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_real {
    ($type:ident) => {
        impl_ops!(AddMonOps, $type);
        impl_ops!(AddGrpOps, $type);
        impl_ops!(MonOps, $type);
        impl_ops!(RingOps, $type);
        impl_ops!(FieldOps, $type);

        impl Elem for $type {
            fn math_symbol() -> String { 
                String::from("R")
            }
        }

        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}
        impl Ring for $type {
            fn inv(&self) -> Option<Self> {
                if self.is_zero() { 
                    None
                } else { 
                    Some(Self::one() / self)
                }
            }

            fn is_unit(&self) -> bool {
                !self.is_zero()
            }

            fn normalizing_unit(&self) -> Self {
                if self.is_zero() { 
                    Self::one()
                } else { 
                    Self::one() / self
                }
            }
        }

        impl Field for $type {}
    };
}

impl_real!(f64);

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn check_type() {
        fn check<T>() where T: Field, for<'a> &'a T: FieldOps<T> {}
        check::<f64>();
    }

    #[test]
    fn inv() { 
        assert_eq!(2.0f64.inv(), Some(0.5));
        assert_eq!(0.0f64.inv(), None);
    }

    #[test]
    fn is_unit() { 
        assert!((-0.25f64).is_unit());
        assert!(!0.0f64.is_unit());
    }

    #[test]
    fn math_symbol() { 
        assert_eq!(f64::math_symbol(), "R");
    }
}
