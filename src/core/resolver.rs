//! Version resolution for packaged build artifacts
//!
//! Resolves the reserved "unspecified" sentinel to a concrete baseline and
//! decorates snapshot versions with build metadata (timestamp + builder)
//! so that two snapshot builds are distinguishable.

use crate::core::identity::{IdentityError, IdentityProvider, SystemIdentityProvider};
use crate::core::time::{SystemTimeProvider, TimeProvider};
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;

/// Reserved version meaning "no version was explicitly set"
///
/// Shared with the CLI layer, which substitutes it for an omitted version
/// argument. Must match the build tool's notion of an unset project version.
pub const DEFAULT_VERSION: &str = "unspecified";

/// Baseline version that the sentinel resolves to
pub const DEFAULT_SNAPSHOT_VERSION: &str = "1.0-SNAPSHOT";

/// Suffix marking a pre-release/mutable build
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Version resolution error types
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("Builder identity lookup failed: {0}")]
    Identity(#[from] IdentityError),
}

/// Result type for version resolution
pub type VersionResult<T> = Result<T, VersionError>;

impl crate::core::error_handling::ContextualError for VersionError {
    fn is_user_actionable(&self) -> bool {
        match self {
            // User can name the builder explicitly or set USER
            VersionError::Identity(_) => true,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            VersionError::Identity(IdentityError::Unavailable { message }) => Some(message),
        }
    }
}

/// Computes the final artifact version string for packaging
///
/// Holds the injected clock and identity capabilities; resolution itself is
/// a pure function of those two reads, so a resolver is safe to share
/// across threads.
pub struct VersionResolver {
    clock: Arc<dyn TimeProvider>,
    identity: Arc<dyn IdentityProvider>,
}

impl VersionResolver {
    /// Create a resolver with explicit clock and identity capabilities
    pub fn new(clock: Arc<dyn TimeProvider>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { clock, identity }
    }

    /// Resolve a candidate version into the final artifact version
    ///
    /// The sentinel is substituted at most once, and only on an exact match.
    /// Any string ending in `-SNAPSHOT` gains a ` (private-<ts>-<builder>)`
    /// suffix with the UTC timestamp truncated to whole seconds. Everything
    /// else, including the empty string, passes through unchanged.
    ///
    /// Resolving is stable under re-application: the appended suffix means
    /// the output no longer ends in `-SNAPSHOT`.
    pub fn resolve(&self, candidate: &str) -> VersionResult<String> {
        let mut output = if candidate == DEFAULT_VERSION {
            DEFAULT_SNAPSHOT_VERSION.to_string()
        } else {
            candidate.to_string()
        };

        if output.ends_with(SNAPSHOT_SUFFIX) {
            let now: DateTime<Utc> = self.clock.system_time().into();
            let stamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
            let builder = self.identity.username()?;
            output.push_str(&format!(" (private-{}-{})", stamp, builder));
        }

        Ok(output)
    }
}

impl Default for VersionResolver {
    /// Resolver wired to the system clock and the OS account identity
    fn default() -> Self {
        Self::new(
            Arc::new(SystemTimeProvider),
            Arc::new(SystemIdentityProvider),
        )
    }
}
