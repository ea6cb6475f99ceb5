mod mono;
mod monomial;
mod univar;
mod poly;
mod upoly;
mod mpoly;
mod parse;
mod expr;

pub use mono::{Mono, MonoOrd};
pub use monomial::Monomial;
pub use univar::Univar;
pub use poly::*;
pub use parse::{ParsedTerm, parse_terms};
pub use expr::Expr;

cfg_if::cfg_if! {
    if #[cfg(feature = "expr")] {
        mod atom;
    }
}
