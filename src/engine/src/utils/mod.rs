mod random;
mod time;

pub use random::*;
pub use time::*;

#[cfg(test)]
pub(crate) use random::tests::ScriptedRandom;
