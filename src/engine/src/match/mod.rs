mod engine;
mod result;
mod series;

pub use engine::*;
pub use result::*;
pub use series::*;
