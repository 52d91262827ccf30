use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Groups assumed for a slot whose position code is unknown.
pub const OUTFIELD_POSITION_GROUPS: &[PlayerFieldPositionGroup] = &[
    PlayerFieldPositionGroup::Defender,
    PlayerFieldPositionGroup::Midfielder,
    PlayerFieldPositionGroup::Forward,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerPositionType {
    Goalkeeper,
    DefenderLeft,
    DefenderCenter,
    DefenderRight,
    WingbackLeft,
    WingbackRight,
    DefensiveMidfielder,
    MidfielderLeft,
    MidfielderCenter,
    MidfielderRight,
    AttackingMidfielderLeft,
    AttackingMidfielderCenter,
    AttackingMidfielderRight,
    Striker,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 14] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::DefenderLeft,
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderRight,
        PlayerPositionType::WingbackLeft,
        PlayerPositionType::WingbackRight,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::MidfielderLeft,
        PlayerPositionType::MidfielderCenter,
        PlayerPositionType::MidfielderRight,
        PlayerPositionType::AttackingMidfielderLeft,
        PlayerPositionType::AttackingMidfielderCenter,
        PlayerPositionType::AttackingMidfielderRight,
        PlayerPositionType::Striker,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::DefenderLeft => "DL",
            PlayerPositionType::DefenderCenter => "DC",
            PlayerPositionType::DefenderRight => "DR",
            PlayerPositionType::WingbackLeft => "WBL",
            PlayerPositionType::WingbackRight => "WBR",
            PlayerPositionType::DefensiveMidfielder => "DM",
            PlayerPositionType::MidfielderLeft => "ML",
            PlayerPositionType::MidfielderCenter => "MC",
            PlayerPositionType::MidfielderRight => "MR",
            PlayerPositionType::AttackingMidfielderLeft => "AML",
            PlayerPositionType::AttackingMidfielderCenter => "AMC",
            PlayerPositionType::AttackingMidfielderRight => "AMR",
            PlayerPositionType::Striker => "ST",
        }
    }

    /// Bands this position feeds when rating a team.
    pub fn position_groups(&self) -> &'static [PlayerFieldPositionGroup] {
        use PlayerFieldPositionGroup::*;

        match self {
            PlayerPositionType::Goalkeeper => &[Goalkeeper],
            PlayerPositionType::DefenderLeft
            | PlayerPositionType::DefenderCenter
            | PlayerPositionType::DefenderRight => &[Defender],
            PlayerPositionType::WingbackLeft
            | PlayerPositionType::WingbackRight
            | PlayerPositionType::DefensiveMidfielder => &[Defender, Midfielder],
            PlayerPositionType::MidfielderLeft
            | PlayerPositionType::MidfielderCenter
            | PlayerPositionType::MidfielderRight => &[Midfielder],
            PlayerPositionType::AttackingMidfielderLeft
            | PlayerPositionType::AttackingMidfielderCenter
            | PlayerPositionType::AttackingMidfielderRight => &[Midfielder, Forward],
            PlayerPositionType::Striker => &[Forward],
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position_groups().contains(&PlayerFieldPositionGroup::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        self.position_groups().contains(&PlayerFieldPositionGroup::Defender)
    }

    pub fn is_midfielder(&self) -> bool {
        self.position_groups().contains(&PlayerFieldPositionGroup::Midfielder)
    }

    pub fn is_forward(&self) -> bool {
        self.position_groups().contains(&PlayerFieldPositionGroup::Forward)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPositionError(pub String);

impl Display for UnknownPositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown position code: {}", self.0)
    }
}

impl std::error::Error for UnknownPositionError {}

impl FromStr for PlayerPositionType {
    type Err = UnknownPositionError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();

        PlayerPositionType::ALL
            .iter()
            .find(|position| position.get_short_name().eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| UnknownPositionError(code.to_string()))
    }
}

impl TryFrom<String> for PlayerPositionType {
    type Error = UnknownPositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlayerPositionType> for String {
    fn from(position: PlayerPositionType) -> Self {
        position.get_short_name().to_string()
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_parse_back() {
        for position in PlayerPositionType::ALL {
            assert_eq!(position.get_short_name().parse::<PlayerPositionType>(), Ok(position));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("amc".parse::<PlayerPositionType>(), Ok(PlayerPositionType::AttackingMidfielderCenter));
        assert_eq!(" st ".parse::<PlayerPositionType>(), Ok(PlayerPositionType::Striker));
        assert!("LIBERO".parse::<PlayerPositionType>().is_err());
    }

    #[test]
    fn test_dual_band_positions() {
        assert!(PlayerPositionType::WingbackLeft.is_defender());
        assert!(PlayerPositionType::WingbackLeft.is_midfielder());
        assert!(PlayerPositionType::AttackingMidfielderCenter.is_midfielder());
        assert!(PlayerPositionType::AttackingMidfielderCenter.is_forward());
        assert!(!PlayerPositionType::DefenderCenter.is_midfielder());
    }

    #[test]
    fn test_only_goalkeeper_is_goalkeeper() {
        let keepers: Vec<_> = PlayerPositionType::ALL
            .iter()
            .filter(|position| position.is_goalkeeper())
            .collect();

        assert_eq!(keepers, vec![&PlayerPositionType::Goalkeeper]);
    }

    #[test]
    fn test_serde_uses_short_codes() {
        let json = serde_json::to_string(&PlayerPositionType::WingbackRight).unwrap();
        assert_eq!(json, "\"WBR\"");

        let position: PlayerPositionType = serde_json::from_str("\"DM\"").unwrap();
        assert_eq!(position, PlayerPositionType::DefensiveMidfielder);

        assert!(serde_json::from_str::<PlayerPositionType>("\"XX\"").is_err());
    }
}
