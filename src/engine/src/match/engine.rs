use crate::club::{Squad, TeamRating};
use crate::r#match::{MatchGoal, MatchResult, MatchSide};
use crate::utils::{RandomSource, ThreadRandom};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const OWN_GOAL_PROBABILITY: f64 = 0.05;
/// Goal count is `floor(r^2 * GOAL_MULTIPLIER)`, so at most `GOAL_MULTIPLIER - 1`.
pub const GOAL_MULTIPLIER: u8 = 8;
pub const MATCH_MINUTES: u8 = 90;

pub const OWN_GOAL_SUFFIX: &str = " (OG)";
pub const PLACEHOLDER_SCORER: &str = "Goal";

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub own_goal_probability: f64,
    pub goal_multiplier: u8,
    pub match_minutes: u8,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            own_goal_probability: OWN_GOAL_PROBABILITY,
            goal_multiplier: GOAL_MULTIPLIER,
            match_minutes: MATCH_MINUTES,
        }
    }
}

/// One side as seen by the simulator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchTeam {
    pub name: String,
    pub overall: u8,
    /// Midfield and attacking players in the lineup.
    pub scorer_pool: Vec<String>,
    /// Every player on the roster.
    pub players: Vec<String>,
}

impl MatchTeam {
    pub fn new(name: impl Into<String>, overall: u8, scorer_pool: Vec<String>, players: Vec<String>) -> Self {
        MatchTeam {
            name: name.into(),
            overall,
            scorer_pool,
            players,
        }
    }

    pub fn from_squad(squad: &Squad) -> Self {
        Self::from_squad_with_rating(squad, &squad.rating())
    }

    pub fn from_squad_with_rating(squad: &Squad, rating: &TeamRating) -> Self {
        let scorer_pool = squad
            .lineup()
            .into_iter()
            .filter(|player| player.position.is_midfielder() || player.position.is_forward())
            .map(|player| player.full_name.clone())
            .collect();

        let players = squad
            .players
            .iter()
            .map(|player| player.full_name.clone())
            .collect();

        MatchTeam::new(squad.name.clone(), rating.overall, scorer_pool, players)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    settings: MatchSettings,
}

impl MatchEngine {
    pub fn new() -> Self {
        MatchEngine::default()
    }

    pub fn with_settings(settings: MatchSettings) -> Self {
        MatchEngine { settings }
    }

    /// Share of goals expected to go to the home side. Two zero ratings are a coin flip.
    pub fn home_win_probability(home_overall: u8, away_overall: u8) -> f64 {
        let total = home_overall as f64 + away_overall as f64;

        if total == 0.0 {
            debug!("both teams rated 0, simulating as an even match");
            return 0.5;
        }

        home_overall as f64 / total
    }

    /// Simulates with the thread-local generator.
    pub fn play(&self, home: &MatchTeam, away: &MatchTeam) -> MatchResult {
        warn_if_unrated(home, away);
        self.simulate(home, away, &mut ThreadRandom)
    }

    pub fn simulate<R: RandomSource + ?Sized>(
        &self,
        home: &MatchTeam,
        away: &MatchTeam,
        random: &mut R,
    ) -> MatchResult {
        let home_probability = Self::home_win_probability(home.overall, away.overall);
        let total_goals = self.goal_count(random);

        debug!(
            "{} ({}) vs {} ({}): home share {:.3}, {} goals",
            home.name, home.overall, away.name, away.overall, home_probability, total_goals
        );

        let goals = (0..total_goals)
            .map(|_| {
                let side = if random.next_float() < home_probability {
                    MatchSide::Home
                } else {
                    MatchSide::Away
                };

                let (scoring, conceding) = match side {
                    MatchSide::Home => (home, away),
                    MatchSide::Away => (away, home),
                };

                let own_goal = random.next_float() < self.settings.own_goal_probability;

                let scorer = if own_goal {
                    let name = pick(&conceding.players, random).unwrap_or(PLACEHOLDER_SCORER);
                    format!("{}{}", name, OWN_GOAL_SUFFIX)
                } else {
                    pick(&scoring.scorer_pool, random)
                        .or_else(|| pick(&scoring.players, random))
                        .unwrap_or(PLACEHOLDER_SCORER)
                        .to_string()
                };

                let minute = random.next_range(1, self.settings.match_minutes.max(1) as u32) as u8;

                debug!("{}' {:?} goal: {}", minute, side, scorer);

                MatchGoal {
                    team: side,
                    scorer,
                    minute,
                    own_goal,
                }
            })
            .collect();

        MatchResult::from_goals(goals)
    }

    fn goal_count<R: RandomSource + ?Sized>(&self, random: &mut R) -> u8 {
        let draw = random.next_float();
        let max_goals = self.settings.goal_multiplier.saturating_sub(1);

        ((draw * draw * self.settings.goal_multiplier as f64).floor() as u8).min(max_goals)
    }
}

/// Warns once per fixture when neither side has a rating.
pub(crate) fn warn_if_unrated(home: &MatchTeam, away: &MatchTeam) {
    if home.overall == 0 && away.overall == 0 {
        warn!("{} and {} are both rated 0, simulating as an even match", home.name, away.name);
    }
}

fn pick<'a, R: RandomSource + ?Sized>(names: &'a [String], random: &mut R) -> Option<&'a str> {
    if names.is_empty() {
        return None;
    }

    Some(names[random.next_index(names.len())].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{MatchTacticType, Player, PlayerPositionType};
    use crate::utils::{ScriptedRandom, SeededRandom};

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn home() -> MatchTeam {
        MatchTeam::new("Home", 60, names(&["Silva", "Lopes"]), names(&["Rui", "Silva", "Lopes"]))
    }

    fn away() -> MatchTeam {
        MatchTeam::new("Away", 60, names(&["Costa"]), names(&["Pereira", "Costa"]))
    }

    #[test]
    fn test_scripted_match() {
        // goal count, then per goal: side, own goal, scorer, minute
        let mut random = ScriptedRandom::new(vec![
            0.6, // 0.36 * 8 -> 2 goals
            0.1, 0.5, 0.0, 0.5, // home, Silva, 46'
            0.9, 0.01, 0.99, 0.1, // away own goal by the last home player, 10'
        ]);

        let result = MatchEngine::new().simulate(&home(), &away(), &mut random);

        assert_eq!(result.score.home, 1);
        assert_eq!(result.score.away, 1);
        assert_eq!(
            result.goals,
            vec![
                MatchGoal { team: MatchSide::Away, scorer: "Lopes (OG)".to_string(), minute: 10, own_goal: true },
                MatchGoal { team: MatchSide::Home, scorer: "Silva".to_string(), minute: 46, own_goal: false },
            ]
        );
    }

    #[test]
    fn test_goal_count_distribution_bounds() {
        let engine = MatchEngine::new();

        assert_eq!(engine.goal_count(&mut ScriptedRandom::new(vec![0.0])), 0);
        assert_eq!(engine.goal_count(&mut ScriptedRandom::new(vec![0.35])), 0);
        assert_eq!(engine.goal_count(&mut ScriptedRandom::new(vec![0.5])), 2);
        assert_eq!(engine.goal_count(&mut ScriptedRandom::new(vec![0.999_999])), 7);
    }

    #[test]
    fn test_home_win_probability() {
        assert_eq!(MatchEngine::home_win_probability(60, 60), 0.5);
        assert_eq!(MatchEngine::home_win_probability(75, 25), 0.75);
        assert_eq!(MatchEngine::home_win_probability(0, 40), 0.0);
        assert_eq!(MatchEngine::home_win_probability(0, 0), 0.5);
    }

    #[test]
    fn test_empty_teams_fall_back_to_placeholder() {
        let empty = MatchTeam::new("Empty", 0, Vec::new(), Vec::new());

        // seven goals, own goals included
        let mut random = ScriptedRandom::new(vec![0.999_999, 0.3, 0.01, 0.4]);
        let result = MatchEngine::new().simulate(&empty, &empty, &mut random);

        assert!(result.goals.iter().all(|goal| goal.scorer.starts_with(PLACEHOLDER_SCORER)));
        assert_eq!(result.score.total() as usize, result.goals.len());
    }

    #[test]
    fn test_scorer_falls_back_to_roster() {
        let no_pool = MatchTeam::new("Defensive", 50, Vec::new(), names(&["Only"]));
        let mut random = ScriptedRandom::new(vec![
            0.6, // 2 goals
            0.0, 0.9, 0.0, 0.0, // home, roster pick, 1'
            0.0, 0.9, 0.0, 0.0, // home again
        ]);

        let result = MatchEngine::new().simulate(&no_pool, &away(), &mut random);

        assert!(result.goals_for(MatchSide::Home).all(|goal| goal.scorer == "Only"));
        assert_eq!(result.score.home, 2);
    }

    #[test]
    fn test_simulation_invariants_over_many_seeds() {
        let engine = MatchEngine::new();
        let home = home();
        let away = away();

        for seed in 0..500 {
            let result = engine.simulate(&home, &away, &mut SeededRandom::new(seed));

            assert!(result.goals.len() <= 7);
            assert_eq!(result.score.total() as usize, result.goals.len());
            assert_eq!(result.score.home as usize, result.goals_for(MatchSide::Home).count());
            assert!(result.goals.windows(2).all(|pair| pair[0].minute <= pair[1].minute));
            assert!(result.goals.iter().all(|goal| (1..=90).contains(&goal.minute)));
        }
    }

    #[test]
    fn test_own_goals_come_from_conceding_roster() {
        let engine = MatchEngine::with_settings(MatchSettings {
            own_goal_probability: 0.5,
            ..MatchSettings::default()
        });
        let home = home();
        let away = away();
        let mut own_goals = 0;

        for seed in 0..300 {
            let result = engine.simulate(&home, &away, &mut SeededRandom::new(seed));

            for goal in result.goals.iter().filter(|goal| goal.own_goal) {
                own_goals += 1;

                let name = goal.scorer.strip_suffix(OWN_GOAL_SUFFIX).unwrap();
                let conceding = match goal.team {
                    MatchSide::Home => &away,
                    MatchSide::Away => &home,
                };

                assert!(conceding.players.iter().any(|player| player == name), "{}", goal.scorer);
            }
        }

        assert!(own_goals > 0);
    }

    #[test]
    fn test_from_squad_builds_pools() {
        let mut squad = Squad::new("Reds", MatchTacticType::T442);
        squad.add_player(Player::new(1, "Keeper", PlayerPositionType::Goalkeeper));
        squad.add_player(Player::new(2, "Back", PlayerPositionType::DefenderCenter));
        squad.add_player(Player::new(3, "Winger", PlayerPositionType::MidfielderLeft));
        squad.add_player(Player::new(4, "Striker", PlayerPositionType::Striker));
        squad.add_player(Player::new(5, "Bench", PlayerPositionType::Striker));
        squad.assign("gk", Some(1));
        squad.assign("dcl", Some(2));
        squad.assign("ml", Some(3));
        squad.assign("stl", Some(4));

        let team = MatchTeam::from_squad(&squad);

        assert_eq!(team.name, "Reds");
        assert_eq!(team.overall, squad.rating().overall);
        assert_eq!(team.scorer_pool, names(&["Winger", "Striker"]));
        assert_eq!(team.players, names(&["Keeper", "Back", "Winger", "Striker", "Bench"]));
    }
}
