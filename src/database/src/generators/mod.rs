mod player;
mod squad;

pub use player::*;
pub use squad::*;
