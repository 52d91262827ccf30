use color_eyre::eyre::{WrapErr, eyre};
use engine::MatchTacticType;
use std::env;
use std::path::PathBuf;

const DEFAULT_LEVEL: u8 = 12;

#[derive(Debug, Clone)]
pub struct HarnessSettings {
    pub home_path: Option<PathBuf>,
    pub away_path: Option<PathBuf>,
    pub formation: MatchTacticType,
    pub level: u8,
    pub runs: u32,
    pub seed: Option<u64>,
}

impl HarnessSettings {
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        let formation = match lookup("MATCHDAY_FORMATION") {
            Some(name) => name.parse::<MatchTacticType>().map_err(|err| eyre!(err))?,
            None => MatchTacticType::T442,
        };

        let level = match lookup("MATCHDAY_LEVEL") {
            Some(value) => value.parse::<u8>().wrap_err("MATCHDAY_LEVEL must be 1-20")?.clamp(1, 20),
            None => DEFAULT_LEVEL,
        };

        let runs = match lookup("MATCHDAY_RUNS") {
            Some(value) => value.parse::<u32>().wrap_err("MATCHDAY_RUNS must be a positive integer")?,
            None => 1,
        };

        let seed = lookup("MATCHDAY_SEED")
            .map(|value| value.parse::<u64>().wrap_err("MATCHDAY_SEED must be an unsigned integer"))
            .transpose()?;

        Ok(HarnessSettings {
            home_path: lookup("MATCHDAY_HOME").map(PathBuf::from),
            away_path: lookup("MATCHDAY_AWAY").map(PathBuf::from),
            formation,
            level,
            runs: runs.max(1),
            seed,
        })
    }
}
