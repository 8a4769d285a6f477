//! # Banana selling environment
//!
//! Each episode sells a single banana. At every step the agent picks one of
//! `num_price_levels` evenly spaced prices in `[0, max_price]`; the banana is
//! bought with probability [`sale_chance`] of that price. After
//! `total_time_steps + 1` unsuccessful offers the banana is thrown away, which
//! also ends the episode and is reported like a sale at price zero.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::chance::sale_chance;
use crate::env::{Env, Step};
use crate::error::EnvError;
use crate::source::UniformSource;
use crate::spaces::{BoxSpace, Discrete};

pub const VERSION: &str = "0.1.0";

/// Price offered on the first step of an episode before any action is taken.
const INITIAL_PRICE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BananaConfig {
    /// Highest price the agent may ask for.
    pub max_price: f64,
    /// Index of the last step of an episode; episodes allow
    /// `total_time_steps + 1` offers.
    pub total_time_steps: u32,
    /// Number of evenly spaced prices from `0` to `max_price` inclusive.
    pub num_price_levels: usize,
}

impl Default for BananaConfig {
    fn default() -> Self {
        Self { max_price: 2.0, total_time_steps: 2, num_price_levels: 21 }
    }
}

impl BananaConfig {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if `max_price` is negative or not
    /// finite, or if fewer than two price levels are requested.
    pub fn validate(&self) -> Result<(), EnvError> {
        if !self.max_price.is_finite() || self.max_price < 0.0 {
            return Err(EnvError::InvalidConfig("max_price must be finite and non-negative"));
        }
        if self.num_price_levels < 2 {
            return Err(EnvError::InvalidConfig("num_price_levels must be at least 2"));
        }
        Ok(())
    }
}

/// How the current episode stands.
///
/// `Sold` and `Expired` both report `done = true` from [`Env::step`]; this
/// view only tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Active,
    Sold,
    Expired,
}

impl Outcome {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Active => "active",
            Outcome::Sold => "sold",
            Outcome::Expired => "expired",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct BananaEnv<R: UniformSource = fastrand::Rng> {
    config: BananaConfig,
    action_space: Discrete,
    observation_space: BoxSpace,
    source: R,
    current_step: i64,
    is_sold: bool,
    outcome: Outcome,
    last_price: f64,
    episode: Option<usize>,
    action_history: Vec<Vec<usize>>,
}

impl BananaEnv<fastrand::Rng> {
    /// Creates an environment with the default configuration and an unseeded
    /// random source. Call [`Env::seed`] for reproducible runs.
    #[must_use]
    pub fn new() -> Self {
        match Self::with_config(BananaConfig::default()) {
            Ok(env) => env,
            Err(e) => unreachable!("default banana configuration rejected: {e}"),
        }
    }

    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(config: BananaConfig) -> Result<Self, EnvError> {
        Self::with_source(config, fastrand::Rng::new())
    }
}

impl Default for BananaEnv<fastrand::Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UniformSource> BananaEnv<R> {
    /// Creates an environment drawing sale decisions from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if `config` fails validation.
    pub fn with_source(config: BananaConfig, source: R) -> Result<Self, EnvError> {
        config.validate()?;
        let action_space = Discrete::new(config.num_price_levels)?;
        // observation is the number of remaining offers
        #[allow(clippy::cast_precision_loss)]
        let observation_space = BoxSpace::new(vec![0.0], vec![config.total_time_steps as f32])?;
        info!("BananaEnv - Version {VERSION}");
        Ok(Self {
            config,
            action_space,
            observation_space,
            source,
            current_step: -1,
            is_sold: false,
            outcome: Outcome::Active,
            last_price: INITIAL_PRICE,
            episode: None,
            action_history: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BananaConfig {
        &self.config
    }

    /// Step counter of the current episode, `-1` right after a reset.
    #[must_use]
    pub fn current_step(&self) -> i64 {
        self.current_step
    }

    /// `true` once the episode is over, whether the banana was bought or
    /// thrown away.
    #[must_use]
    pub fn is_sold(&self) -> bool {
        self.is_sold
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Price of the latest offer; `0.0` if the banana expired.
    #[must_use]
    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    /// Zero-based index of the running episode, `None` before the first reset.
    #[must_use]
    pub fn current_episode(&self) -> Option<usize> {
        self.episode
    }

    /// Actions taken so far, one inner list per episode.
    #[must_use]
    pub fn action_history(&self) -> &[Vec<usize>] {
        &self.action_history
    }

    /// Price asked for by `action`. Does not check the action space.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn price_for(&self, action: usize) -> f64 {
        (self.config.max_price / (self.config.num_price_levels - 1) as f64) * action as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn observation(&self) -> Vec<f32> {
        vec![(i64::from(self.config.total_time_steps) - self.current_step) as f32]
    }

    fn take_action(&mut self, episode: usize, action: usize) {
        self.action_history[episode].push(action);
        self.last_price = self.price_for(action);

        let chance = sale_chance(self.last_price);
        let draw = self.source.next_f64();
        if draw < chance {
            self.is_sold = true;
            self.outcome = Outcome::Sold;
        }

        let remaining_steps = i64::from(self.config.total_time_steps) - self.current_step;
        if remaining_steps <= 0 && !self.is_sold {
            // thrown away: reported as a sale at price zero
            self.is_sold = true;
            self.outcome = Outcome::Expired;
            self.last_price = 0.0;
        }

        debug!(
            episode,
            step = self.current_step,
            action,
            price = self.last_price,
            chance,
            draw,
            outcome = %self.outcome,
            "banana offered"
        );
    }

    fn reward(&self) -> f64 {
        if self.is_sold {
            self.last_price - 1.0
        } else {
            0.0
        }
    }
}

impl<R: UniformSource> Env for BananaEnv<R> {
    fn step(&mut self, action: usize) -> Result<Step, EnvError> {
        let Some(episode) = self.episode else {
            warn!("step called before reset");
            return Err(EnvError::InvalidOperation("reset must be called before step"));
        };
        if self.is_sold {
            warn!(episode, "step called on a finished episode");
            return Err(EnvError::InvalidOperation("episode is done"));
        }
        if !self.action_space.contains(action) {
            warn!(action, n = self.action_space.n(), "rejected action");
            return Err(EnvError::InvalidAction { action, n: self.action_space.n() });
        }

        self.current_step += 1;
        self.take_action(episode, action);
        Ok(Step {
            obs: self.observation(),
            reward: self.reward(),
            done: self.is_sold,
            info: HashMap::new(),
        })
    }

    fn reset(&mut self) -> Vec<f32> {
        self.current_step = -1;
        let episode = self.episode.map_or(0, |e| e + 1);
        self.episode = Some(episode);
        self.action_history.push(Vec::new());
        self.is_sold = false;
        self.outcome = Outcome::Active;
        self.last_price = INITIAL_PRICE;
        debug!(episode, "episode reset");
        self.observation()
    }

    fn seed(&mut self, seed: u64) {
        self.source.reseed(seed);
    }

    fn action_space(&self) -> Discrete {
        self.action_space
    }

    fn observation_space(&self) -> BoxSpace {
        self.observation_space.clone()
    }

    fn render(&self) -> String {
        match self.episode {
            None => "banana: not started".to_string(),
            Some(episode) => format!(
                "banana: episode {episode} step {}/{} price {:.2} {}",
                self.current_step, self.config.total_time_steps, self.last_price, self.outcome
            ),
        }
    }
}
