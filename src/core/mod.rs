//! Core infrastructure module for Pure Rust AdaBoost.
//!
//! This module provides the foundational components shared by every other
//! module: fundamental data types, constants, error handling and the weak
//! learner trait abstraction.
//!
//! - [`types`]: Fundamental data types and enumerations
//! - [`constants`]: System constants and configuration defaults
//! - [`error`]: Error types and the crate-wide `Result` alias
//! - [`numeric`]: Small numeric helpers
//! - [`traits`]: The [`WeakLearner`] abstraction

pub mod constants;
pub mod error;
pub mod numeric;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{AdaBoostError, Result};
pub use traits::*;
pub use types::*;

use std::sync::atomic::{AtomicBool, Ordering};

static CORE_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the logging subsystem.
///
/// `RUST_LOG` defaults to `info` when unset. Calling this more than once is
/// harmless.
pub fn initialize_core() -> Result<()> {
    if CORE_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let env = env_logger::Env::default().default_filter_or("info");
    // Another logger may already be installed by the host application.
    let _ = env_logger::Builder::from_env(env).try_init();

    log::debug!("AdaBoost core initialized (version {})", ADABOOST_RUST_VERSION);
    Ok(())
}

/// Check if the core module is initialized
pub fn is_core_initialized() -> bool {
    CORE_INITIALIZED.load(Ordering::SeqCst)
}
