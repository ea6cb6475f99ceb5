mod int_ext;
mod float_ext;

pub use int_ext::*;
