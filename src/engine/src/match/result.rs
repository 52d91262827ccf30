use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSide {
    Home,
    Away,
}

impl MatchSide {
    pub fn opponent(&self) -> MatchSide {
        match self {
            MatchSide::Home => MatchSide::Away,
            MatchSide::Away => MatchSide::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGoal {
    /// Side credited with the goal.
    pub team: MatchSide,
    pub scorer: String,
    pub minute: u8,
    #[serde(default)]
    pub own_goal: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }

    pub fn total(&self) -> u8 {
        self.home.saturating_add(self.away)
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: Score,
    pub goals: Vec<MatchGoal>,
}

impl MatchResult {
    /// Orders goals by minute and derives the score from them.
    pub fn from_goals(goals: Vec<MatchGoal>) -> Self {
        let goals: Vec<MatchGoal> = goals.into_iter().sorted_by_key(|goal| goal.minute).collect();

        let home = goals.iter().filter(|goal| goal.team == MatchSide::Home).count();
        let away = goals.len() - home;

        MatchResult {
            score: Score::new(saturating_count(home), saturating_count(away)),
            goals,
        }
    }

    pub fn goals_for(&self, side: MatchSide) -> impl Iterator<Item = &MatchGoal> {
        self.goals.iter().filter(move |goal| goal.team == side)
    }

    pub fn own_goals(&self) -> usize {
        self.goals.iter().filter(|goal| goal.own_goal).count()
    }
}

fn saturating_count(count: usize) -> u8 {
    u8::try_from(count).unwrap_or(u8::MAX)
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.goals.is_empty() {
            return write!(f, "{}", self.score);
        }

        let goals = self
            .goals
            .iter()
            .map(|goal| format!("{} {}'", goal.scorer, goal.minute))
            .join(", ");

        write!(f, "{} ({})", self.score, goals)
    }
}
