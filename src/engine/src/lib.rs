pub mod club;
pub mod r#match;
pub mod utils;

pub use club::*;
pub use r#match::*;
pub use utils::*;
