//! String-keyed construction of environments.
//!
//! The table is fixed at compile time; there is no plugin discovery.

use tracing::info;

use crate::banana_env::BananaEnv;
use crate::error::EnvError;

pub const ENV_ID: &str = "Banana-v0";

#[must_use]
pub fn registered_ids() -> &'static [&'static str] {
    &[ENV_ID]
}

/// Builds the environment registered under `id`.
///
/// # Errors
///
/// Returns [`EnvError::UnknownEnvironment`] if nothing is registered under `id`.
pub fn make(id: &str) -> Result<BananaEnv, EnvError> {
    match id {
        ENV_ID => {
            info!(id, "making environment");
            Ok(BananaEnv::new())
        }
        other => Err(EnvError::UnknownEnvironment(other.to_string())),
    }
}
