mod terms;
mod ratio;
mod gauss;
mod poly;

pub use terms::*;
pub use ratio::*;
pub use gauss::*;
pub use poly::*;
