//! Builder identity abstraction for testable identity-dependent logic
//!
//! Snapshot stamping records who produced the build. The identity comes from
//! the operating system account by default, or from an explicitly configured
//! builder name.

/// Builder identity error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    #[error("No builder identity available: {message}")]
    Unavailable { message: String },
}

/// Result type for identity lookups
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Abstraction over the builder identity lookup
pub trait IdentityProvider: Send + Sync {
    /// Get the current builder's name
    fn username(&self) -> IdentityResult<String>;
}

/// Production identity provider reading the OS account name
///
/// Reads `USER` (POSIX) and falls back to `USERNAME` (Windows). A build
/// environment that defines neither is reported as a capability failure.
#[derive(Default, Clone)]
pub struct SystemIdentityProvider;

impl IdentityProvider for SystemIdentityProvider {
    fn username(&self) -> IdentityResult<String> {
        for var in ["USER", "USERNAME"] {
            if let Ok(name) = std::env::var(var) {
                if !name.is_empty() {
                    return Ok(name);
                }
            }
        }
        Err(IdentityError::Unavailable {
            message: "neither USER nor USERNAME is set".to_string(),
        })
    }
}

/// Identity provider with an explicitly configured builder name
///
/// Used when the builder is named on the command line or in the
/// configuration file instead of being derived from the OS account.
#[derive(Debug, Clone)]
pub struct ConfiguredIdentityProvider {
    name: String,
}

impl ConfiguredIdentityProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl IdentityProvider for ConfiguredIdentityProvider {
    fn username(&self) -> IdentityResult<String> {
        Ok(self.name.clone())
    }
}

/// Mock identity provider for deterministic testing
#[derive(Clone)]
#[cfg(test)]
pub struct MockIdentityProvider {
    result: IdentityResult<String>,
}

#[cfg(test)]
impl MockIdentityProvider {
    /// Create a mock that always returns the given name
    pub fn with_name(name: &str) -> Self {
        Self {
            result: Ok(name.to_string()),
        }
    }

    /// Create a mock that always fails the lookup
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(IdentityError::Unavailable {
                message: message.to_string(),
            }),
        }
    }
}

#[cfg(test)]
impl IdentityProvider for MockIdentityProvider {
    fn username(&self) -> IdentityResult<String> {
        self.result.clone()
    }
}
