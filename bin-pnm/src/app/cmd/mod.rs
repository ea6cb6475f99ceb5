pub mod calc;
pub mod pow;
pub mod subst;
pub mod diff;
pub mod div;
