use crate::club::{Formation, MatchTacticType, Player, TeamRating, TeamRatingCalculator};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot id to player id. A missing key and a `None` value both mean the slot is empty.
pub type SquadAssignment = HashMap<String, Option<u32>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squad {
    pub name: String,
    pub formation: String,
    #[serde(default)]
    pub assignment: SquadAssignment,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Squad {
    pub fn new(name: impl Into<String>, tactic: MatchTacticType) -> Self {
        Squad {
            name: name.into(),
            formation: tactic.display_name().to_string(),
            assignment: SquadAssignment::new(),
            players: Vec::new(),
        }
    }

    pub fn tactic(&self) -> Option<MatchTacticType> {
        MatchTacticType::from_display_name(&self.formation)
    }

    /// Layout for the squad's formation name; an unknown name yields an empty layout.
    pub fn formation_layout(&self) -> Formation {
        match self.tactic() {
            Some(tactic) => tactic.formation(),
            None => {
                warn!("squad {}: unknown formation {}", self.name, self.formation);
                Formation::new(self.formation.clone(), Vec::new())
            }
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn assign(&mut self, slot_id: impl Into<String>, player_id: Option<u32>) {
        self.assignment.insert(slot_id.into(), player_id);
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Player filling `slot_id`, ignoring ids that are not on the roster.
    pub fn player_in_slot(&self, slot_id: &str) -> Option<&Player> {
        resolve_slot(&self.assignment, &self.players, slot_id)
    }

    /// Players on the pitch in formation order.
    pub fn lineup(&self) -> Vec<&Player> {
        self.formation_layout()
            .slots
            .iter()
            .filter_map(|slot| self.player_in_slot(&slot.id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lineup().is_empty()
    }

    pub fn rating(&self) -> TeamRating {
        TeamRatingCalculator::calculate(&self.formation_layout().slots, &self.assignment, &self.players)
    }
}

pub(crate) fn resolve_slot<'p>(
    assignment: &SquadAssignment,
    roster: &'p [Player],
    slot_id: &str,
) -> Option<&'p Player> {
    let player_id = assignment.get(slot_id).copied().flatten()?;

    roster.iter().find(|player| player.id == player_id)
}
