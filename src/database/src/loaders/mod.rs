mod squad;

pub use squad::*;
