use crate::club::{OUTFIELD_POSITION_GROUPS, PlayerFieldPositionGroup, PlayerPositionType};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A position on the formation layout. `location` is x across, y up from own goal, both 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub id: String,
    pub position_code: String,
    pub location: Vector2<f32>,
}

impl FormationSlot {
    pub fn new(id: impl Into<String>, position_code: impl Into<String>, x: f32, y: f32) -> Self {
        FormationSlot {
            id: id.into(),
            position_code: position_code.into(),
            location: Vector2::new(x, y),
        }
    }

    pub fn position(&self) -> Option<PlayerPositionType> {
        self.position_code.parse().ok()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position() == Some(PlayerPositionType::Goalkeeper)
    }

    /// Bands this slot contributes to. Unknown codes count towards every outfield band.
    pub fn position_groups(&self) -> &'static [PlayerFieldPositionGroup] {
        self.position()
            .map(|position| position.position_groups())
            .unwrap_or(OUTFIELD_POSITION_GROUPS)
    }
}

/// Number of slots expected to feed `group`, whoever fills them.
pub fn count_slots(slots: &[FormationSlot], group: PlayerFieldPositionGroup) -> usize {
    slots
        .iter()
        .filter(|slot| slot.position_groups().contains(&group))
        .count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(name: impl Into<String>, slots: Vec<FormationSlot>) -> Self {
        Formation {
            name: name.into(),
            slots,
        }
    }

    pub fn slot_count(&self, group: PlayerFieldPositionGroup) -> usize {
        count_slots(&self.slots, group)
    }

    pub fn slot(&self, id: &str) -> Option<&FormationSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }
}

type SlotDefinition = (&'static str, PlayerPositionType, f32, f32);

const GOALKEEPER: SlotDefinition = ("gk", PlayerPositionType::Goalkeeper, 50.0, 5.0);

const BACK_FOUR: [SlotDefinition; 4] = [
    ("dl", PlayerPositionType::DefenderLeft, 15.0, 25.0),
    ("dcl", PlayerPositionType::DefenderCenter, 38.0, 20.0),
    ("dcr", PlayerPositionType::DefenderCenter, 62.0, 20.0),
    ("dr", PlayerPositionType::DefenderRight, 85.0, 25.0),
];

const BACK_THREE: [SlotDefinition; 3] = [
    ("dcl", PlayerPositionType::DefenderCenter, 28.0, 20.0),
    ("dc", PlayerPositionType::DefenderCenter, 50.0, 18.0),
    ("dcr", PlayerPositionType::DefenderCenter, 72.0, 20.0),
];

const FLAT_FOUR_MIDFIELD: [SlotDefinition; 4] = [
    ("ml", PlayerPositionType::MidfielderLeft, 15.0, 55.0),
    ("mcl", PlayerPositionType::MidfielderCenter, 38.0, 50.0),
    ("mcr", PlayerPositionType::MidfielderCenter, 62.0, 50.0),
    ("mr", PlayerPositionType::MidfielderRight, 85.0, 55.0),
];

const CENTRAL_THREE: [SlotDefinition; 3] = [
    ("mcl", PlayerPositionType::MidfielderCenter, 30.0, 50.0),
    ("mc", PlayerPositionType::MidfielderCenter, 50.0, 45.0),
    ("mcr", PlayerPositionType::MidfielderCenter, 70.0, 50.0),
];

const STRIKER_PAIR: [SlotDefinition; 2] = [
    ("stl", PlayerPositionType::Striker, 38.0, 82.0),
    ("str", PlayerPositionType::Striker, 62.0, 82.0),
];

const LONE_STRIKER: SlotDefinition = ("st", PlayerPositionType::Striker, 50.0, 85.0);

#[derive(Copy, Debug, Eq, PartialEq, PartialOrd, Clone, Hash, Serialize, Deserialize)]
pub enum MatchTacticType {
    T442,
    T433,
    T451,
    T4231,
    T352,
    T4141,
    T4411,
    T343,
    T532,
}

impl MatchTacticType {
    pub fn all() -> Vec<MatchTacticType> {
        vec![
            MatchTacticType::T442,
            MatchTacticType::T433,
            MatchTacticType::T451,
            MatchTacticType::T4231,
            MatchTacticType::T352,
            MatchTacticType::T4141,
            MatchTacticType::T4411,
            MatchTacticType::T343,
            MatchTacticType::T532,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchTacticType::T442 => "4-4-2",
            MatchTacticType::T433 => "4-3-3",
            MatchTacticType::T451 => "4-5-1",
            MatchTacticType::T4231 => "4-2-3-1",
            MatchTacticType::T352 => "3-5-2",
            MatchTacticType::T4141 => "4-1-4-1",
            MatchTacticType::T4411 => "4-4-1-1",
            MatchTacticType::T343 => "3-4-3",
            MatchTacticType::T532 => "5-3-2",
        }
    }

    pub fn from_display_name(name: &str) -> Option<MatchTacticType> {
        let name = name.trim();

        Self::all()
            .into_iter()
            .find(|tactic| tactic.display_name() == name)
    }

    pub fn formation(&self) -> Formation {
        let definitions = self.slot_definitions();

        Formation::new(
            self.display_name(),
            definitions
                .into_iter()
                .map(|(id, position, x, y)| FormationSlot::new(id, position.get_short_name(), x, y))
                .collect(),
        )
    }

    fn slot_definitions(&self) -> Vec<SlotDefinition> {
        let mut slots = vec![GOALKEEPER];

        match self {
            MatchTacticType::T442 => {
                slots.extend(BACK_FOUR);
                slots.extend(FLAT_FOUR_MIDFIELD);
                slots.extend(STRIKER_PAIR);
            }
            MatchTacticType::T433 => {
                slots.extend(BACK_FOUR);
                slots.extend(CENTRAL_THREE);
                slots.extend([
                    ("aml", PlayerPositionType::AttackingMidfielderLeft, 15.0, 78.0),
                    LONE_STRIKER,
                    ("amr", PlayerPositionType::AttackingMidfielderRight, 85.0, 78.0),
                ]);
            }
            MatchTacticType::T451 => {
                slots.extend(BACK_FOUR);
                slots.extend([
                    ("ml", PlayerPositionType::MidfielderLeft, 12.0, 55.0),
                    ("mcl", PlayerPositionType::MidfielderCenter, 32.0, 50.0),
                    ("mc", PlayerPositionType::MidfielderCenter, 50.0, 47.0),
                    ("mcr", PlayerPositionType::MidfielderCenter, 68.0, 50.0),
                    ("mr", PlayerPositionType::MidfielderRight, 88.0, 55.0),
                    LONE_STRIKER,
                ]);
            }
            MatchTacticType::T4231 => {
                slots.extend(BACK_FOUR);
                slots.extend([
                    ("dml", PlayerPositionType::DefensiveMidfielder, 38.0, 38.0),
                    ("dmr", PlayerPositionType::DefensiveMidfielder, 62.0, 38.0),
                    ("aml", PlayerPositionType::AttackingMidfielderLeft, 15.0, 65.0),
                    ("amc", PlayerPositionType::AttackingMidfielderCenter, 50.0, 65.0),
                    ("amr", PlayerPositionType::AttackingMidfielderRight, 85.0, 65.0),
                    LONE_STRIKER,
                ]);
            }
            MatchTacticType::T352 => {
                slots.extend(BACK_THREE);
                slots.push(("wbl", PlayerPositionType::WingbackLeft, 10.0, 45.0));
                slots.extend(CENTRAL_THREE);
                slots.push(("wbr", PlayerPositionType::WingbackRight, 90.0, 45.0));
                slots.extend(STRIKER_PAIR);
            }
            MatchTacticType::T4141 => {
                slots.extend(BACK_FOUR);
                slots.push(("dm", PlayerPositionType::DefensiveMidfielder, 50.0, 35.0));
                slots.extend(FLAT_FOUR_MIDFIELD);
                slots.push(LONE_STRIKER);
            }
            MatchTacticType::T4411 => {
                slots.extend(BACK_FOUR);
                slots.extend(FLAT_FOUR_MIDFIELD);
                slots.push(("amc", PlayerPositionType::AttackingMidfielderCenter, 50.0, 70.0));
                slots.push(LONE_STRIKER);
            }
            MatchTacticType::T343 => {
                slots.extend(BACK_THREE);
                slots.extend(FLAT_FOUR_MIDFIELD);
                slots.extend([
                    ("aml", PlayerPositionType::AttackingMidfielderLeft, 20.0, 78.0),
                    LONE_STRIKER,
                    ("amr", PlayerPositionType::AttackingMidfielderRight, 80.0, 78.0),
                ]);
            }
            MatchTacticType::T532 => {
                slots.push(("wbl", PlayerPositionType::WingbackLeft, 10.0, 30.0));
                slots.extend(BACK_THREE);
                slots.push(("wbr", PlayerPositionType::WingbackRight, 90.0, 30.0));
                slots.extend(CENTRAL_THREE);
                slots.extend(STRIKER_PAIR);
            }
        }

        slots
    }
}

impl FromStr for MatchTacticType {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(name).ok_or_else(|| format!("unknown formation: {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_formation_has_eleven_unique_slots() {
        for tactic in MatchTacticType::all() {
            let formation = tactic.formation();
            let ids: HashSet<&str> = formation.slots.iter().map(|slot| slot.id.as_str()).collect();

            assert_eq!(formation.slots.len(), 11, "{}", tactic.display_name());
            assert_eq!(ids.len(), 11, "{}", tactic.display_name());
        }
    }

    #[test]
    fn test_every_formation_has_one_goalkeeper_and_known_codes() {
        for tactic in MatchTacticType::all() {
            let formation = tactic.formation();

            assert_eq!(formation.slots.iter().filter(|s| s.is_goalkeeper()).count(), 1);
            assert!(formation.slots.iter().all(|s| s.position().is_some()));
        }
    }

    #[test]
    fn test_every_formation_feeds_every_outfield_band() {
        for tactic in MatchTacticType::all() {
            let formation = tactic.formation();

            for &group in OUTFIELD_POSITION_GROUPS {
                assert!(formation.slot_count(group) > 0, "{} {:?}", tactic.display_name(), group);
            }
        }
    }

    #[test]
    fn test_slot_counts_for_442() {
        let formation = MatchTacticType::T442.formation();

        assert_eq!(formation.name, "4-4-2");
        assert_eq!(formation.slot_count(PlayerFieldPositionGroup::Goalkeeper), 1);
        assert_eq!(formation.slot_count(PlayerFieldPositionGroup::Defender), 4);
        assert_eq!(formation.slot_count(PlayerFieldPositionGroup::Midfielder), 4);
        assert_eq!(formation.slot_count(PlayerFieldPositionGroup::Forward), 2);
    }

    #[test]
    fn test_dual_band_slots_count_twice() {
        let formation = MatchTacticType::T4231.formation();

        // two DMs feed defence and midfield, three AMs feed midfield and attack
        assert_eq!(formation.slot_count(PlayerFieldPositionGroup::Defender), 6);
        assert_eq!(formation.slot_count(PlayerFieldPositionGroup::Midfielder), 5);
        assert_eq!(formation.slot_count(PlayerFieldPositionGroup::Forward), 4);
    }

    #[test]
    fn test_unknown_slot_code_feeds_all_outfield_bands() {
        let slot = FormationSlot::new("x", "SW", 50.0, 10.0);

        assert_eq!(slot.position(), None);
        assert_eq!(slot.position_groups(), OUTFIELD_POSITION_GROUPS);
        assert!(!slot.is_goalkeeper());
    }

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(MatchTacticType::from_display_name("3-5-2"), Some(MatchTacticType::T352));
        assert_eq!("4-2-3-1".parse::<MatchTacticType>(), Ok(MatchTacticType::T4231));
        assert_eq!(MatchTacticType::from_display_name("2-3-5"), None);
    }
}
