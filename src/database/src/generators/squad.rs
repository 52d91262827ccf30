use crate::generators::PlayerGenerator;
use engine::{MatchTacticType, PlayerPositionType, RandomSource, Squad};
use log::debug;

const BENCH_POSITIONS: [PlayerPositionType; 5] = [
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::MidfielderCenter,
    PlayerPositionType::AttackingMidfielderCenter,
    PlayerPositionType::Striker,
];

#[derive(Default)]
pub struct SquadGenerator {
    players: PlayerGenerator,
}

impl SquadGenerator {
    pub fn new(players: PlayerGenerator) -> Self {
        SquadGenerator { players }
    }

    /// A full lineup for `tactic` plus a bench, every player around `level`.
    pub fn generate<R: RandomSource + ?Sized>(
        &mut self,
        random: &mut R,
        name: &str,
        tactic: MatchTacticType,
        level: u8,
    ) -> Squad {
        let mut squad = Squad::new(name, tactic);

        for slot in tactic.formation().slots {
            let position = slot
                .position()
                .unwrap_or(PlayerPositionType::MidfielderCenter);
            let player = self.players.generate(random, position, level);

            squad.assign(slot.id, Some(player.id));
            squad.add_player(player);
        }

        for position in BENCH_POSITIONS {
            squad.add_player(self.players.generate(random, position, level));
        }

        debug!("generated squad {} ({}), level {}", name, tactic.display_name(), level);

        squad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::SeededRandom;

    #[test]
    fn test_generated_squad_fills_every_slot() {
        let mut generator = SquadGenerator::default();
        let mut random = SeededRandom::new(10);

        for tactic in MatchTacticType::all() {
            let squad = generator.generate(&mut random, "Generated", tactic, 14);

            assert_eq!(squad.lineup().len(), 11);
            assert_eq!(squad.players.len(), 11 + BENCH_POSITIONS.len());
            assert!(!squad.is_empty());
        }
    }

    #[test]
    fn test_player_ids_are_unique_across_squads() {
        let mut generator = SquadGenerator::default();
        let mut random = SeededRandom::new(11);

        let home = generator.generate(&mut random, "Home", MatchTacticType::T442, 12);
        let away = generator.generate(&mut random, "Away", MatchTacticType::T433, 12);

        assert!(home.players.iter().all(|p| away.player(p.id).is_none()));
    }

    #[test]
    fn test_level_drives_rating() {
        let mut generator = SquadGenerator::default();
        let mut random = SeededRandom::new(12);

        let strong = generator.generate(&mut random, "Strong", MatchTacticType::T4231, 18);
        let weak = generator.generate(&mut random, "Weak", MatchTacticType::T4231, 5);

        assert!(strong.rating().overall > weak.rating().overall);
        assert!(strong.rating().overall <= 100);
    }
}
