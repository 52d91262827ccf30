mod history;
mod player;
mod positions;
mod skills;

pub use history::*;
pub use player::*;
pub use positions::*;
pub use skills::*;
