use std::collections::HashMap;

use crate::error::EnvError;
use crate::spaces::{BoxSpace, Discrete};

/// Outcome of a single [`Env::step`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Observation after the action was applied.
    pub obs: Vec<f32>,
    pub reward: f64,
    /// `true` once the episode has terminated and [`Env::reset`] must be called.
    pub done: bool,
    /// Diagnostic key/value pairs. Not meant to be used for learning.
    pub info: HashMap<String, String>,
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one discrete action and returns the new observation vector, a
/// reward signal, and whether the episode has terminated.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] if `action` is not part of
    /// [`Env::action_space`] and [`EnvError::InvalidOperation`] if the episode
    /// has already terminated.
    fn step(&mut self, action: usize) -> Result<Step, EnvError>;

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Seed the random source driving the environment's stochastic transitions.
    fn seed(&mut self, seed: u64);

    fn action_space(&self) -> Discrete;

    fn observation_space(&self) -> BoxSpace;

    /// Human readable one-line description of the current state.
    fn render(&self) -> String;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize {
        self.observation_space().shape()
    }

    /// Number of discrete actions.
    fn action_size(&self) -> usize {
        self.action_space().n()
    }
}
