//! Episode loop and reporting.

use std::io::Write;

use anyhow::{Context, Result};
use banana::{BananaEnv, Env};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "banana_runtime", about = "Play episodes of the banana selling environment")]
pub struct Args {
    /// Registered environment id.
    #[arg(long, default_value = banana::ENV_ID)]
    pub env: String,
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,
    /// Seeds both the environment and the random policy.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    #[arg(long, value_enum, default_value_t = Policy::Random)]
    pub policy: Policy,
    /// Price level offered by the fixed policy.
    #[arg(long, default_value_t = 10)]
    pub action: usize,
    /// Print one JSON summary per episode on stdout.
    #[arg(long)]
    pub json: bool,
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Uniformly random price level every step.
    Random,
    /// Always offer `--action`.
    Fixed,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub episode: usize,
    pub steps: usize,
    pub actions: Vec<usize>,
    pub final_price: f64,
    pub reward: f64,
    pub outcome: &'static str,
}

/// Plays `args.episodes` episodes and reports each of them.
///
/// # Errors
///
/// Returns an error for an unknown environment id, an action outside the
/// action space, or a failed write to stdout.
pub fn run(args: &Args) -> Result<()> {
    let mut env = banana::make(&args.env).with_context(|| format!("creating environment {}", args.env))?;
    env.seed(args.seed);
    let mut policy_rng = fastrand::Rng::with_seed(args.seed.wrapping_add(1));

    tracing::info!(
        "Playing {} episodes of {} with {:?} policy, seed {}",
        args.episodes,
        args.env,
        args.policy,
        args.seed
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut total_reward = 0.0;
    for _ in 0..args.episodes {
        let summary = run_episode(&mut env, args.policy, args.action, &mut policy_rng)?;
        tracing::info!(
            "Episode {} {} after {} steps at price {:.2}, reward {:.2}",
            summary.episode,
            summary.outcome,
            summary.steps,
            summary.final_price,
            summary.reward
        );
        total_reward += summary.reward;
        if args.json {
            let line = serde_json::to_string(&summary).context("serializing episode summary")?;
            writeln!(out, "{line}").context("writing episode summary")?;
        }
    }

    if args.episodes > 0 {
        #[allow(clippy::cast_precision_loss)]
        let mean = total_reward / args.episodes as f64;
        tracing::info!("Mean reward over {} episodes: {:.3}", args.episodes, mean);
    }
    Ok(())
}

/// Runs one episode to termination.
///
/// # Errors
///
/// Propagates any error returned by [`Env::step`].
pub fn run_episode(
    env: &mut BananaEnv,
    policy: Policy,
    fixed_action: usize,
    rng: &mut fastrand::Rng,
) -> Result<EpisodeSummary> {
    env.reset();
    let action_space = env.action_space();
    let mut reward = 0.0;
    loop {
        let action = match policy {
            Policy::Random => action_space.sample(rng),
            Policy::Fixed => fixed_action,
        };
        let step = env.step(action).context("stepping environment")?;
        tracing::debug!("{}", env.render());
        reward += step.reward;
        if step.done {
            break;
        }
    }

    let actions = env.action_history().last().cloned().unwrap_or_default();
    Ok(EpisodeSummary {
        episode: env.current_episode().unwrap_or_default(),
        steps: actions.len(),
        actions,
        final_price: env.last_price(),
        reward,
        outcome: env.outcome().as_str(),
    })
}
