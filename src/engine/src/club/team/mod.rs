pub mod rating;
pub mod squad;
pub mod tactics;

pub use rating::*;
pub use squad::*;
pub use tactics::*;
