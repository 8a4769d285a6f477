//! # Banana
//!
//! A deliberately tiny episodic reinforcement learning environment: sell one
//! banana by choosing a price. Cheaper offers sell more often, but the reward
//! is the price minus one, and a banana that is still unsold after the last
//! step is thrown away for a reward of `-1`.
//!
//! ```
//! use banana::{make, Env};
//!
//! let mut env = make("Banana-v0").unwrap();
//! env.seed(0);
//! let obs = env.reset();
//! assert_eq!(obs, vec![3.0]);
//! let step = env.step(0).unwrap();
//! assert!(step.done);
//! ```

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod banana_env;
pub mod chance;
pub mod env;
pub mod error;
pub mod registry;
pub mod source;
pub mod spaces;

pub use banana_env::{BananaConfig, BananaEnv, Outcome, VERSION};
pub use chance::sale_chance;
pub use env::{Env, Step};
pub use error::EnvError;
pub use registry::{make, registered_ids, ENV_ID};
pub use source::UniformSource;
pub use spaces::{BoxSpace, Discrete};
