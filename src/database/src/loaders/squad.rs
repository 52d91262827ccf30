use crate::{DatabaseError, DatabaseResult};
use engine::Squad;
use log::{debug, warn};
use std::fs;
use std::path::Path;

pub struct SquadLoader;

impl SquadLoader {
    pub fn load(path: impl AsRef<Path>) -> DatabaseResult<Squad> {
        let path = path.as_ref();

        debug!("loading squad from {}", path.display());

        let json = fs::read_to_string(path)?;

        Self::from_json(&json)
    }

    /// Parses a squad and checks it against its formation. Assignment entries that point at
    /// unknown slots or players are kept but reported, they rate as empty slots.
    pub fn from_json(json: &str) -> DatabaseResult<Squad> {
        let squad: Squad = serde_json::from_str(json)?;

        let Some(tactic) = squad.tactic() else {
            return Err(DatabaseError::UnknownFormation {
                squad: squad.name.clone(),
                formation: squad.formation.clone(),
            });
        };

        let formation = tactic.formation();

        for (slot_id, player_id) in &squad.assignment {
            if formation.slot(slot_id).is_none() {
                warn!("squad {}: slot {} is not part of {}", squad.name, slot_id, formation.name);
            }

            if let Some(id) = player_id {
                if squad.player(*id).is_none() {
                    warn!("squad {}: slot {} references unknown player {}", squad.name, slot_id, id);
                }
            }
        }

        debug!(
            "squad {} loaded: {} players, {} in lineup",
            squad.name,
            squad.players.len(),
            squad.lineup().len()
        );

        Ok(squad)
    }
}
