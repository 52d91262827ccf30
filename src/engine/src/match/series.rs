use crate::r#match::engine::warn_if_unrated;
use crate::r#match::{MatchEngine, MatchOutcome, MatchResult, MatchTeam};
use crate::utils::SeededRandom;
use log::info;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSeriesSummary {
    pub runs: u32,
    pub home_wins: u32,
    pub draws: u32,
    pub away_wins: u32,
    pub home_goals: u32,
    pub away_goals: u32,
    pub own_goals: u32,
}

impl MatchSeriesSummary {
    pub fn record(mut self, result: &MatchResult) -> Self {
        self.runs += 1;
        self.home_goals += result.score.home as u32;
        self.away_goals += result.score.away as u32;
        self.own_goals += result.own_goals() as u32;

        match result.score.outcome() {
            MatchOutcome::HomeWin => self.home_wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::AwayWin => self.away_wins += 1,
        }

        self
    }

    pub fn merge(self, other: Self) -> Self {
        MatchSeriesSummary {
            runs: self.runs + other.runs,
            home_wins: self.home_wins + other.home_wins,
            draws: self.draws + other.draws,
            away_wins: self.away_wins + other.away_wins,
            home_goals: self.home_goals + other.home_goals,
            away_goals: self.away_goals + other.away_goals,
            own_goals: self.own_goals + other.own_goals,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.home_goals + self.away_goals
    }

    /// Fraction of all goals credited to the home side, 0.5 when no goal was scored.
    pub fn home_goal_share(&self) -> f64 {
        match self.total_goals() {
            0 => 0.5,
            total => self.home_goals as f64 / total as f64,
        }
    }

    pub fn average_goals(&self) -> f64 {
        match self.runs {
            0 => 0.0,
            runs => self.total_goals() as f64 / runs as f64,
        }
    }
}

pub struct MatchSeries;

impl MatchSeries {
    /// Plays `runs` independent matches in parallel. Run `n` is seeded with `seed + n`.
    pub fn run(
        engine: &MatchEngine,
        home: &MatchTeam,
        away: &MatchTeam,
        runs: u32,
        seed: u64,
    ) -> MatchSeriesSummary {
        warn_if_unrated(home, away);

        let summary = (0..runs)
            .into_par_iter()
            .map(|run| {
                let mut random = SeededRandom::new(seed.wrapping_add(run as u64));
                engine.simulate(home, away, &mut random)
            })
            .fold(MatchSeriesSummary::default, |summary, result| summary.record(&result))
            .reduce(MatchSeriesSummary::default, MatchSeriesSummary::merge);

        info!(
            "{} vs {}: {} runs, {}W {}D {}L, {:.2} goals per match",
            home.name,
            away.name,
            summary.runs,
            summary.home_wins,
            summary.draws,
            summary.away_wins,
            summary.average_goals()
        );

        summary
    }
}
