mod gen;
mod terms;

pub use gen::*;
pub use terms::*;
