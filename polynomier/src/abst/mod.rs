mod elem;
mod additive;
mod ring;
mod euc_ring;
mod field;

pub use elem::*;
pub use additive::*;
pub use ring::*;
pub use euc_ring::*;
pub use field::*;
