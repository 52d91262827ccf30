use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const SKILL_MIN_VALUE: u8 = 1;
pub const SKILL_MAX_VALUE: u8 = 20;

/// Rating given to an attribute average of `SKILL_MIN_VALUE`.
pub const RATING_FLOOR: f64 = 30.0;
/// Rating given to an attribute average of `SKILL_MAX_VALUE`.
pub const RATING_CEILING: f64 = 100.0;

/// Maps a 1-20 attribute average onto the 30-100 rating curve.
pub fn rating_scale(average: f64) -> f64 {
    let span = (SKILL_MAX_VALUE - SKILL_MIN_VALUE) as f64;

    RATING_FLOOR + ((average - SKILL_MIN_VALUE as f64) / span) * (RATING_CEILING - RATING_FLOOR)
}

/// Full attribute set of a player. A value of 0 means the attribute is unknown.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSkills {
    pub technical: Technical,
    pub mental: Mental,
    pub physical: Physical,
    pub goalkeeping: Goalkeeping,
}

impl PlayerSkills {
    pub fn get(&self, skill: SkillType) -> u8 {
        *self.slot(skill)
    }

    pub fn set(&mut self, skill: SkillType, value: u8) {
        *self.slot_mut(skill) = value.min(SKILL_MAX_VALUE);
    }

    /// Mean of `skills`, counting unknown attributes as 0.
    pub fn average_of(&self, skills: &[SkillType]) -> f64 {
        if skills.is_empty() {
            return 0.0;
        }

        let total: u32 = skills.iter().map(|&skill| self.get(skill) as u32).sum();

        total as f64 / skills.len() as f64
    }

    /// Simplified ability used by summary views: every known attribute on the rating curve.
    /// `None` when no attribute is known.
    pub fn ability(&self) -> Option<u8> {
        let known: Vec<u32> = SkillType::ALL
            .iter()
            .map(|&skill| self.get(skill) as u32)
            .filter(|&value| value > 0)
            .collect();

        if known.is_empty() {
            return None;
        }

        let average = known.iter().sum::<u32>() as f64 / known.len() as f64;

        Some(rating_scale(average).round().clamp(0.0, RATING_CEILING) as u8)
    }

    pub fn is_empty(&self) -> bool {
        SkillType::ALL.iter().all(|&skill| self.get(skill) == 0)
    }

    fn slot(&self, skill: SkillType) -> &u8 {
        let t = &self.technical;
        let m = &self.mental;
        let p = &self.physical;
        let g = &self.goalkeeping;

        match skill {
            SkillType::Corners => &t.corners,
            SkillType::Crossing => &t.crossing,
            SkillType::Dribbling => &t.dribbling,
            SkillType::Finishing => &t.finishing,
            SkillType::FirstTouch => &t.first_touch,
            SkillType::FreeKicks => &t.free_kicks,
            SkillType::Heading => &t.heading,
            SkillType::LongShots => &t.long_shots,
            SkillType::LongThrows => &t.long_throws,
            SkillType::Marking => &t.marking,
            SkillType::Passing => &t.passing,
            SkillType::PenaltyTaking => &t.penalty_taking,
            SkillType::Tackling => &t.tackling,
            SkillType::Technique => &t.technique,

            SkillType::Aggression => &m.aggression,
            SkillType::Anticipation => &m.anticipation,
            SkillType::Bravery => &m.bravery,
            SkillType::Composure => &m.composure,
            SkillType::Concentration => &m.concentration,
            SkillType::Decisions => &m.decisions,
            SkillType::Determination => &m.determination,
            SkillType::Flair => &m.flair,
            SkillType::Leadership => &m.leadership,
            SkillType::OffTheBall => &m.off_the_ball,
            SkillType::Positioning => &m.positioning,
            SkillType::Teamwork => &m.teamwork,
            SkillType::Vision => &m.vision,
            SkillType::WorkRate => &m.work_rate,

            SkillType::Acceleration => &p.acceleration,
            SkillType::Agility => &p.agility,
            SkillType::Balance => &p.balance,
            SkillType::Jumping => &p.jumping,
            SkillType::NaturalFitness => &p.natural_fitness,
            SkillType::Pace => &p.pace,
            SkillType::Stamina => &p.stamina,
            SkillType::Strength => &p.strength,

            SkillType::AerialReach => &g.aerial_reach,
            SkillType::CommandOfArea => &g.command_of_area,
            SkillType::Communication => &g.communication,
            SkillType::Eccentricity => &g.eccentricity,
            SkillType::Handling => &g.handling,
            SkillType::Kicking => &g.kicking,
            SkillType::OneOnOnes => &g.one_on_ones,
            SkillType::Punching => &g.punching,
            SkillType::Reflexes => &g.reflexes,
            SkillType::RushingOut => &g.rushing_out,
            SkillType::Throwing => &g.throwing,
        }
    }

    fn slot_mut(&mut self, skill: SkillType) -> &mut u8 {
        let t = &mut self.technical;
        let m = &mut self.mental;
        let p = &mut self.physical;
        let g = &mut self.goalkeeping;

        match skill {
            SkillType::Corners => &mut t.corners,
            SkillType::Crossing => &mut t.crossing,
            SkillType::Dribbling => &mut t.dribbling,
            SkillType::Finishing => &mut t.finishing,
            SkillType::FirstTouch => &mut t.first_touch,
            SkillType::FreeKicks => &mut t.free_kicks,
            SkillType::Heading => &mut t.heading,
            SkillType::LongShots => &mut t.long_shots,
            SkillType::LongThrows => &mut t.long_throws,
            SkillType::Marking => &mut t.marking,
            SkillType::Passing => &mut t.passing,
            SkillType::PenaltyTaking => &mut t.penalty_taking,
            SkillType::Tackling => &mut t.tackling,
            SkillType::Technique => &mut t.technique,

            SkillType::Aggression => &mut m.aggression,
            SkillType::Anticipation => &mut m.anticipation,
            SkillType::Bravery => &mut m.bravery,
            SkillType::Composure => &mut m.composure,
            SkillType::Concentration => &mut m.concentration,
            SkillType::Decisions => &mut m.decisions,
            SkillType::Determination => &mut m.determination,
            SkillType::Flair => &mut m.flair,
            SkillType::Leadership => &mut m.leadership,
            SkillType::OffTheBall => &mut m.off_the_ball,
            SkillType::Positioning => &mut m.positioning,
            SkillType::Teamwork => &mut m.teamwork,
            SkillType::Vision => &mut m.vision,
            SkillType::WorkRate => &mut m.work_rate,

            SkillType::Acceleration => &mut p.acceleration,
            SkillType::Agility => &mut p.agility,
            SkillType::Balance => &mut p.balance,
            SkillType::Jumping => &mut p.jumping,
            SkillType::NaturalFitness => &mut p.natural_fitness,
            SkillType::Pace => &mut p.pace,
            SkillType::Stamina => &mut p.stamina,
            SkillType::Strength => &mut p.strength,

            SkillType::AerialReach => &mut g.aerial_reach,
            SkillType::CommandOfArea => &mut g.command_of_area,
            SkillType::Communication => &mut g.communication,
            SkillType::Eccentricity => &mut g.eccentricity,
            SkillType::Handling => &mut g.handling,
            SkillType::Kicking => &mut g.kicking,
            SkillType::OneOnOnes => &mut g.one_on_ones,
            SkillType::Punching => &mut g.punching,
            SkillType::Reflexes => &mut g.reflexes,
            SkillType::RushingOut => &mut g.rushing_out,
            SkillType::Throwing => &mut g.throwing,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technical {
    pub corners: u8,
    pub crossing: u8,
    pub dribbling: u8,
    pub finishing: u8,
    pub first_touch: u8,
    pub free_kicks: u8,
    pub heading: u8,
    pub long_shots: u8,
    pub long_throws: u8,
    pub marking: u8,
    pub passing: u8,
    pub penalty_taking: u8,
    pub tackling: u8,
    pub technique: u8,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mental {
    pub aggression: u8,
    pub anticipation: u8,
    pub bravery: u8,
    pub composure: u8,
    pub concentration: u8,
    pub decisions: u8,
    pub determination: u8,
    pub flair: u8,
    pub leadership: u8,
    pub off_the_ball: u8,
    pub positioning: u8,
    pub teamwork: u8,
    pub vision: u8,
    pub work_rate: u8,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physical {
    pub acceleration: u8,
    pub agility: u8,
    pub balance: u8,
    pub jumping: u8,
    pub natural_fitness: u8,
    pub pace: u8,
    pub stamina: u8,
    pub strength: u8,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goalkeeping {
    pub aerial_reach: u8,
    pub command_of_area: u8,
    pub communication: u8,
    pub eccentricity: u8,
    pub handling: u8,
    pub kicking: u8,
    pub one_on_ones: u8,
    pub punching: u8,
    pub reflexes: u8,
    pub rushing_out: u8,
    pub throwing: u8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    // Technical
    Corners,
    Crossing,
    Dribbling,
    Finishing,
    FirstTouch,
    FreeKicks,
    Heading,
    LongShots,
    LongThrows,
    Marking,
    Passing,
    PenaltyTaking,
    Tackling,
    Technique,
    // Mental
    Aggression,
    Anticipation,
    Bravery,
    Composure,
    Concentration,
    Decisions,
    Determination,
    Flair,
    Leadership,
    OffTheBall,
    Positioning,
    Teamwork,
    Vision,
    WorkRate,
    // Physical
    Acceleration,
    Agility,
    Balance,
    Jumping,
    NaturalFitness,
    Pace,
    Stamina,
    Strength,
    // Goalkeeping
    AerialReach,
    CommandOfArea,
    Communication,
    Eccentricity,
    Handling,
    Kicking,
    OneOnOnes,
    Punching,
    Reflexes,
    RushingOut,
    Throwing,
}

impl SkillType {
    pub const ALL: [SkillType; 47] = [
        SkillType::Corners,
        SkillType::Crossing,
        SkillType::Dribbling,
        SkillType::Finishing,
        SkillType::FirstTouch,
        SkillType::FreeKicks,
        SkillType::Heading,
        SkillType::LongShots,
        SkillType::LongThrows,
        SkillType::Marking,
        SkillType::Passing,
        SkillType::PenaltyTaking,
        SkillType::Tackling,
        SkillType::Technique,
        SkillType::Aggression,
        SkillType::Anticipation,
        SkillType::Bravery,
        SkillType::Composure,
        SkillType::Concentration,
        SkillType::Decisions,
        SkillType::Determination,
        SkillType::Flair,
        SkillType::Leadership,
        SkillType::OffTheBall,
        SkillType::Positioning,
        SkillType::Teamwork,
        SkillType::Vision,
        SkillType::WorkRate,
        SkillType::Acceleration,
        SkillType::Agility,
        SkillType::Balance,
        SkillType::Jumping,
        SkillType::NaturalFitness,
        SkillType::Pace,
        SkillType::Stamina,
        SkillType::Strength,
        SkillType::AerialReach,
        SkillType::CommandOfArea,
        SkillType::Communication,
        SkillType::Eccentricity,
        SkillType::Handling,
        SkillType::Kicking,
        SkillType::OneOnOnes,
        SkillType::Punching,
        SkillType::Reflexes,
        SkillType::RushingOut,
        SkillType::Throwing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillType::Corners => "Corners",
            SkillType::Crossing => "Crossing",
            SkillType::Dribbling => "Dribbling",
            SkillType::Finishing => "Finishing",
            SkillType::FirstTouch => "First Touch",
            SkillType::FreeKicks => "Free Kick Taking",
            SkillType::Heading => "Heading",
            SkillType::LongShots => "Long Shots",
            SkillType::LongThrows => "Long Throws",
            SkillType::Marking => "Marking",
            SkillType::Passing => "Passing",
            SkillType::PenaltyTaking => "Penalty Taking",
            SkillType::Tackling => "Tackling",
            SkillType::Technique => "Technique",
            SkillType::Aggression => "Aggression",
            SkillType::Anticipation => "Anticipation",
            SkillType::Bravery => "Bravery",
            SkillType::Composure => "Composure",
            SkillType::Concentration => "Concentration",
            SkillType::Decisions => "Decisions",
            SkillType::Determination => "Determination",
            SkillType::Flair => "Flair",
            SkillType::Leadership => "Leadership",
            SkillType::OffTheBall => "Off the Ball",
            SkillType::Positioning => "Positioning",
            SkillType::Teamwork => "Teamwork",
            SkillType::Vision => "Vision",
            SkillType::WorkRate => "Work Rate",
            SkillType::Acceleration => "Acceleration",
            SkillType::Agility => "Agility",
            SkillType::Balance => "Balance",
            SkillType::Jumping => "Jumping Reach",
            SkillType::NaturalFitness => "Natural Fitness",
            SkillType::Pace => "Pace",
            SkillType::Stamina => "Stamina",
            SkillType::Strength => "Strength",
            SkillType::AerialReach => "Aerial Reach",
            SkillType::CommandOfArea => "Command of Area",
            SkillType::Communication => "Communication",
            SkillType::Eccentricity => "Eccentricity",
            SkillType::Handling => "Handling",
            SkillType::Kicking => "Kicking",
            SkillType::OneOnOnes => "One on Ones",
            SkillType::Punching => "Punching (Tendency)",
            SkillType::Reflexes => "Reflexes",
            SkillType::RushingOut => "Rushing Out (Tendency)",
            SkillType::Throwing => "Throwing",
        }
    }
}

impl Display for SkillType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
