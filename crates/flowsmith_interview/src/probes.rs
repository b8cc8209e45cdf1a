//! Capability probes.
//!
//! A probe answers one question about the user's environment: is this tool
//! or platform account available? Probes are the only outbound dependency of
//! the interview, and a failing probe degrades to `false` at the call site.

use std::fmt;

use async_trait::async_trait;

use crate::error::ProbeResult;

/// Identifier of one probed capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeId {
    /// git on the PATH
    Git,
    /// node on the PATH
    Node,
    /// python3 (or python) on the PATH
    Python,
    /// Make platform credentials configured
    MakeAccount,
    /// Zapier credentials configured
    ZapierAccount,
}

impl ProbeId {
    pub const ALL: [ProbeId; 5] = [
        Self::Git,
        Self::Node,
        Self::Python,
        Self::MakeAccount,
        Self::ZapierAccount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Git => "git CLI",
            Self::Node => "Node.js runtime",
            Self::Python => "Python runtime",
            Self::MakeAccount => "Make account",
            Self::ZapierAccount => "Zapier account",
        }
    }
}

impl fmt::Display for ProbeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Boolean-returning collaborator for one named tool or platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    async fn check(&self, probe: ProbeId) -> ProbeResult<bool>;
}

/// Probes the real environment: binaries via PATH lookup, platform accounts
/// via credential environment variables.
pub struct SystemProbe;

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }

    fn binary_available(name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn env_token_set(var: &str) -> bool {
        std::env::var(var).map(|v| !v.trim().is_empty()).unwrap_or(false)
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CapabilityProbe for SystemProbe {
    async fn check(&self, probe: ProbeId) -> ProbeResult<bool> {
        let available = match probe {
            ProbeId::Git => Self::binary_available("git"),
            ProbeId::Node => Self::binary_available("node"),
            ProbeId::Python => {
                Self::binary_available("python3") || Self::binary_available("python")
            }
            ProbeId::MakeAccount => Self::env_token_set("MAKE_API_TOKEN"),
            ProbeId::ZapierAccount => Self::env_token_set("ZAPIER_API_TOKEN"),
        };
        Ok(available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_probe_never_errors() {
        let probe = SystemProbe::new();
        for id in ProbeId::ALL {
            assert!(probe.check(id).await.is_ok());
        }
    }

    #[test]
    fn test_probe_labels() {
        assert_eq!(ProbeId::Git.label(), "git CLI");
        assert_eq!(ProbeId::ALL.len(), 5);
    }
}
