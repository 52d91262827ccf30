use crate::club::team::squad::resolve_slot;
use crate::club::{
    FormationSlot, PlayerFieldPositionGroup, Player, RATING_CEILING, RATING_FLOOR, SkillType,
    SquadAssignment, count_slots, rating_scale,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Band score of a player who has no attribute data at all.
pub const NO_SKILLS_RATING: f64 = RATING_FLOOR;

pub const GOALKEEPING_SKILLS: &[SkillType] = &[
    SkillType::Handling,
    SkillType::Reflexes,
    SkillType::OneOnOnes,
    SkillType::AerialReach,
    SkillType::CommandOfArea,
    SkillType::Communication,
    SkillType::Kicking,
    SkillType::Throwing,
    SkillType::RushingOut,
    SkillType::Punching,
    SkillType::Positioning,
    SkillType::Concentration,
    SkillType::Decisions,
    SkillType::Agility,
];

pub const DEFENDING_SKILLS: &[SkillType] = &[
    SkillType::Tackling,
    SkillType::Marking,
    SkillType::Heading,
    SkillType::Positioning,
    SkillType::Anticipation,
    SkillType::Concentration,
    SkillType::Decisions,
    SkillType::Bravery,
    SkillType::Composure,
    SkillType::Teamwork,
    SkillType::Strength,
    SkillType::Jumping,
];

pub const MIDFIELD_SKILLS: &[SkillType] = &[
    SkillType::Passing,
    SkillType::Vision,
    SkillType::FirstTouch,
    SkillType::Technique,
    SkillType::Dribbling,
    SkillType::Decisions,
    SkillType::Anticipation,
    SkillType::Composure,
    SkillType::Teamwork,
    SkillType::WorkRate,
    SkillType::OffTheBall,
    SkillType::Stamina,
];

pub const ATTACKING_SKILLS: &[SkillType] = &[
    SkillType::Finishing,
    SkillType::Dribbling,
    SkillType::FirstTouch,
    SkillType::Technique,
    SkillType::Heading,
    SkillType::LongShots,
    SkillType::Composure,
    SkillType::OffTheBall,
    SkillType::Anticipation,
    SkillType::Flair,
    SkillType::Pace,
    SkillType::Acceleration,
];

/// Attributes averaged to rate a player in `group`.
pub fn group_skills(group: PlayerFieldPositionGroup) -> &'static [SkillType] {
    match group {
        PlayerFieldPositionGroup::Goalkeeper => GOALKEEPING_SKILLS,
        PlayerFieldPositionGroup::Defender => DEFENDING_SKILLS,
        PlayerFieldPositionGroup::Midfielder => MIDFIELD_SKILLS,
        PlayerFieldPositionGroup::Forward => ATTACKING_SKILLS,
    }
}

/// Strength of a lineup per band, every value 0-100.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRating {
    pub gk: u8,
    pub def: u8,
    pub mid: u8,
    pub att: u8,
    pub overall: u8,
}

impl TeamRating {
    pub fn from_bands(gk: u8, def: u8, mid: u8, att: u8) -> Self {
        let mean = (gk as f64 + def as f64 + mid as f64 + att as f64) / 4.0;

        TeamRating {
            gk,
            def,
            mid,
            att,
            overall: mean.round() as u8,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == TeamRating::default()
    }
}

pub struct TeamRatingCalculator;

impl TeamRatingCalculator {
    pub fn calculate(
        slots: &[FormationSlot],
        assignment: &SquadAssignment,
        roster: &[Player],
    ) -> TeamRating {
        let mut keeping = 0.0;
        let mut sums = BandTotals::default();

        for slot in slots {
            let Some(player) = resolve_slot(assignment, roster, &slot.id) else {
                continue;
            };

            if slot.is_goalkeeper() {
                keeping += Self::player_score(player, PlayerFieldPositionGroup::Goalkeeper);
                continue;
            }

            for &group in slot.position_groups() {
                let score = Self::player_score(player, group);

                debug!("slot {} ({}): {} adds {:.1} to {:?}", slot.id, slot.position_code, player.full_name, score, group);

                sums.add(group, score);
            }
        }

        TeamRating::from_bands(
            to_rating(keeping),
            sums.average(PlayerFieldPositionGroup::Defender, count_slots(slots, PlayerFieldPositionGroup::Defender)),
            sums.average(PlayerFieldPositionGroup::Midfielder, count_slots(slots, PlayerFieldPositionGroup::Midfielder)),
            sums.average(PlayerFieldPositionGroup::Forward, count_slots(slots, PlayerFieldPositionGroup::Forward)),
        )
    }

    /// A player's 30-100 score for one band. Missing attributes count as 0.
    pub fn player_score(player: &Player, group: PlayerFieldPositionGroup) -> f64 {
        match &player.skills {
            Some(skills) => rating_scale(skills.average_of(group_skills(group))),
            None => NO_SKILLS_RATING,
        }
    }
}

fn to_rating(value: f64) -> u8 {
    value.round().clamp(0.0, RATING_CEILING) as u8
}

#[derive(Debug, Default)]
struct BandTotals {
    def: f64,
    mid: f64,
    att: f64,
}

impl BandTotals {
    fn add(&mut self, group: PlayerFieldPositionGroup, score: f64) {
        match group {
            PlayerFieldPositionGroup::Defender => self.def += score,
            PlayerFieldPositionGroup::Midfielder => self.mid += score,
            PlayerFieldPositionGroup::Forward => self.att += score,
            PlayerFieldPositionGroup::Goalkeeper => {}
        }
    }

    fn average(&self, group: PlayerFieldPositionGroup, expected: usize) -> u8 {
        if expected == 0 {
            return 0;
        }

        let total = match group {
            PlayerFieldPositionGroup::Defender => self.def,
            PlayerFieldPositionGroup::Midfielder => self.mid,
            PlayerFieldPositionGroup::Forward => self.att,
            PlayerFieldPositionGroup::Goalkeeper => 0.0,
        };

        to_rating(total / expected as f64)
    }
}
