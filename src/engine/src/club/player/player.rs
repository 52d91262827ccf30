use crate::club::{PlayerPositionType, PlayerSkills};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Ability reported by summary views for a player without attribute data.
pub const UNKNOWN_ABILITY: u8 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub full_name: String,
    pub position: PlayerPositionType,
    #[serde(default)]
    pub skills: Option<PlayerSkills>,
}

impl Player {
    pub fn new(id: u32, full_name: impl Into<String>, position: PlayerPositionType) -> Self {
        Player {
            id,
            full_name: full_name.into(),
            position,
            skills: None,
        }
    }

    pub fn with_skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn has_skills(&self) -> bool {
        self.skills.is_some()
    }

    /// Summary-view ability, `UNKNOWN_ABILITY` when nothing is known about the player.
    pub fn ability(&self) -> u8 {
        self.skills
            .as_ref()
            .and_then(PlayerSkills::ability)
            .unwrap_or(UNKNOWN_ABILITY)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.full_name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::SkillType;

    #[test]
    fn test_ability_without_skills_is_unknown() {
        let player = Player::new(1, "Ivan Petrov", PlayerPositionType::Striker);

        assert!(!player.has_skills());
        assert_eq!(player.ability(), UNKNOWN_ABILITY);
    }

    #[test]
    fn test_ability_with_empty_skills_is_unknown() {
        let player = Player::new(1, "Ivan Petrov", PlayerPositionType::Striker)
            .with_skills(PlayerSkills::default());

        assert_eq!(player.ability(), UNKNOWN_ABILITY);
    }

    #[test]
    fn test_ability_uses_known_skills() {
        let mut skills = PlayerSkills::default();
        skills.set(SkillType::Finishing, 1);
        skills.set(SkillType::Composure, 1);

        let player = Player::new(7, "Ivan Petrov", PlayerPositionType::Striker).with_skills(skills);

        assert_eq!(player.ability(), 30);
    }

    #[test]
    fn test_display() {
        let player = Player::new(4, "Marco Bianchi", PlayerPositionType::DefenderCenter);

        assert_eq!(player.to_string(), "Marco Bianchi (DC)");
    }
}
