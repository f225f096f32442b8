//! Capture and restore of a complete environment.
//!
//! Responsibilities:
//! - Record every variable of an environment at one instant.
//! - Replace the live environment with exactly the recorded content.
//! - Provide an RAII guard that restores on drop, for hermetic tests and tools.
//!
//! Invariants:
//! - A snapshot is immutable once captured.
//! - Restore clears the environment first, so variables added after capture
//!   are removed and removed ones come back.
//! - Names and values are kept as raw OS strings, so entries that are not
//!   valid Unicode come back byte for byte.
//! - `SnapshotGuard::drop` never panics; restore failures are logged.

use std::ffi::OsString;

use crate::env::{Environment, ProcessEnv};
use crate::error::EnvError;

/// The variables of an environment captured at a point in time.
///
/// ```no_run
/// let _guard = envkit::Snapshot::capture().guard();
/// envkit::set("APP_MODE", "test")?;
/// // APP_MODE is restored to its previous state when `_guard` drops.
/// # Ok::<(), envkit::EnvError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    vars: Vec<(OsString, OsString)>,
}

impl Snapshot {
    /// Captures the process environment.
    pub fn capture() -> Self {
        Self::capture_from(&ProcessEnv)
    }

    /// Captures the variables of `env` in the order it lists them.
    pub fn capture_from<E: Environment + ?Sized>(env: &E) -> Self {
        Self {
            vars: env.vars_os(),
        }
    }

    /// The captured `(name, value)` pairs.
    pub fn vars(&self) -> &[(OsString, OsString)] {
        &self.vars
    }

    /// Replaces the process environment with the captured content.
    pub fn restore(&self) -> Result<(), EnvError> {
        self.restore_to(&ProcessEnv)
    }

    /// Clears `env`, then sets every captured pair in capture order.
    pub fn restore_to<E: Environment + ?Sized>(&self, env: &E) -> Result<(), EnvError> {
        env.clear()?;
        for (name, value) in &self.vars {
            env.set_os(name, value)?;
        }
        Ok(())
    }

    /// Returns a guard that restores the process environment when dropped.
    pub fn guard(self) -> SnapshotGuard<ProcessEnv> {
        SnapshotGuard {
            snapshot: self,
            env: ProcessEnv,
        }
    }

    /// Returns a guard that restores `env` when dropped.
    pub fn guard_for<E: Environment>(self, env: E) -> SnapshotGuard<E> {
        SnapshotGuard {
            snapshot: self,
            env,
        }
    }
}

/// RAII guard restoring a [`Snapshot`] on drop.
#[derive(Debug)]
pub struct SnapshotGuard<E: Environment> {
    snapshot: Snapshot,
    env: E,
}

impl<E: Environment> SnapshotGuard<E> {
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl<E: Environment> Drop for SnapshotGuard<E> {
    fn drop(&mut self) {
        if let Err(e) = self.snapshot.restore_to(&self.env) {
            tracing::warn!(
                error = %e,
                "Could not restore environment snapshot"
            );
        }
    }
}
