//! Dino Runner entry point
//!
//! Headless runner: plays episodes with the autopilot, logs each one and
//! prints the best runs.
//!
//! ```text
//! dino-runner [--episodes N] [--seed S] [--max-ticks T] [--tuning FILE] [--json]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dino_runner::sim::Autopilot;
use dino_runner::{DinoEnv, EnvError, EpisodeSummary, HighScores, Tuning};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "dino-runner",
    about = "Play Dino Runner episodes headlessly with the autopilot",
    version
)]
struct Options {
    /// Number of episodes to play
    #[arg(long, default_value_t = 5)]
    episodes: u32,

    /// Seed of the first episode; episode i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Time limit per episode; the environment itself never truncates
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// JSON file overriding the default tuning
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the leaderboard as JSON
    #[arg(long)]
    json: bool,
}

/// Play one episode; returns the summary and whether the time limit cut it short
fn play_episode(
    env: &mut DinoEnv,
    pilot: &Autopilot,
    seed: u64,
    max_ticks: u64,
) -> Result<(EpisodeSummary, bool), EnvError> {
    env.reset(Some(seed));
    for _ in 0..max_ticks {
        let action = pilot.decide(env.state(), env.tuning());
        let step = env.step_action(action)?;
        if let Some(summary) = step.info.episode {
            return Ok((summary, false));
        }
    }
    let state = env.state();
    let summary = EpisodeSummary {
        reward: env.episode_reward(),
        length: state.ticks,
        score: state.score,
    };
    log::info!("episode truncated after {} ticks", summary.length);
    Ok((summary, true))
}

fn run(opts: &Options) -> Result<HighScores, EnvError> {
    let tuning = match &opts.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let pilot = Autopilot::new(&tuning);
    let mut env = DinoEnv::with_tuning(tuning)?;
    let mut scores = HighScores::new();

    for i in 0..opts.episodes {
        let seed = opts.seed.wrapping_add(i as u64);
        let (summary, truncated) = play_episode(&mut env, &pilot, seed, opts.max_ticks)?;
        log::info!(
            "episode {} (seed {}): score {:.1}, {} ticks, reward {}{}",
            i + 1,
            seed,
            summary.score,
            summary.length,
            summary.reward,
            if truncated { " [time limit]" } else { "" }
        );
        if let Some(rank) = scores.add_episode(&summary, Some(seed)) {
            log::debug!("seed {seed} ranked #{rank}");
        }
    }

    env.close();
    Ok(scores)
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = Options::parse();
    log::info!("Dino Runner (headless) starting: {opts:?}");

    let scores = match run(&opts) {
        Ok(scores) => scores,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if opts.json {
        match serde_json::to_string_pretty(&scores) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("failed to encode results: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Best runs:");
        for (rank, entry) in scores.entries.iter().enumerate() {
            println!(
                "{:>2}. score {:>8.1}  ticks {:>6}  seed {}",
                rank + 1,
                entry.score,
                entry.ticks,
                entry.seed.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
            );
        }
    }
    ExitCode::SUCCESS
}
