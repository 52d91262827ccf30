mod tactics;

pub use tactics::*;
