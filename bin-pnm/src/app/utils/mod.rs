pub mod ctype;
pub mod dispatch;
pub mod helper;

pub use ctype::*;
pub use helper::*;
pub(crate) use dispatch::{dispatch_ring, dispatch_field};
