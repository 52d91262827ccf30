mod settings;

use database::{SquadGenerator, SquadLoader};
use engine::{
    MatchEngine, MatchSeries, MatchSide, MatchTeam, RandomSource, SeededRandom, Squad, ThreadRandom, TimeEstimation,
};
use env_logger::Env;
use itertools::Itertools;
use log::{info, warn};
use settings::HarnessSettings;
use std::path::Path;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let settings = HarnessSettings::from_env()?;

    let mut random: Box<dyn RandomSource> = match settings.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let mut generator = SquadGenerator::default();

    let home = load_squad(settings.home_path.as_deref(), || {
        generator.generate(random.as_mut(), "Home XI", settings.formation, settings.level)
    })?;
    let away = load_squad(settings.away_path.as_deref(), || {
        generator.generate(random.as_mut(), "Away XI", settings.formation, settings.level)
    })?;

    let ((home_rating, away_rating), estimated) =
        TimeEstimation::estimate(|| (home.rating(), away.rating()));

    info!("ratings computed: {} ms", estimated);

    for (squad, rating) in [(&home, &home_rating), (&away, &away_rating)] {
        info!(
            "{} ({}): GK {} DEF {} MID {} ATT {} overall {}",
            squad.name, squad.formation, rating.gk, rating.def, rating.mid, rating.att, rating.overall
        );
        info!("{} lineup: {}", squad.name, squad.lineup().iter().join(", "));
    }

    if home.is_empty() && away.is_empty() {
        warn!("both squads are empty, nothing to simulate");
        return Ok(());
    }

    let home_team = MatchTeam::from_squad_with_rating(&home, &home_rating);
    let away_team = MatchTeam::from_squad_with_rating(&away, &away_rating);

    let engine = MatchEngine::new();

    if settings.runs > 1 {
        let seed = settings
            .seed
            .unwrap_or_else(|| (random.next_float() * u64::MAX as f64) as u64);

        let (summary, estimated) = TimeEstimation::estimate(|| {
            MatchSeries::run(&engine, &home_team, &away_team, settings.runs, seed)
        });

        info!("series finished: {} ms", estimated);
        info!(
            "home goal share {:.1}%, {} own goals",
            summary.home_goal_share() * 100.0,
            summary.own_goals
        );
    } else {
        let result = engine.simulate(&home_team, &away_team, random.as_mut());

        info!("{} {} {}", home.name, result.score, away.name);

        for goal in &result.goals {
            let team = match goal.team {
                MatchSide::Home => &home.name,
                MatchSide::Away => &away.name,
            };

            info!("{}' {} ({})", goal.minute, goal.scorer, team);
        }
    }

    Ok(())
}

fn load_squad(path: Option<&Path>, generate: impl FnOnce() -> Squad) -> color_eyre::Result<Squad> {
    match path {
        Some(path) => {
            let squad = SquadLoader::load(path)?;
            info!("loaded squad {} from {}", squad.name, path.display());
            Ok(squad)
        }
        None => Ok(generate()),
    }
}
