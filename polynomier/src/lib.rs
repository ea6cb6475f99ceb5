mod abst;
mod misc;
mod types;
mod err;

pub use abst::*;
pub use misc::*;
pub use types::*;
pub use err::PolyError;

pub mod util;
