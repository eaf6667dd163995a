//! Legacy HTTP health check resource model.

use serde::{Deserialize, Serialize};

/// A legacy HTTP health check. Global resource: identified by `project` and
/// `name`, no location scope.
///
/// All probe settings are optional; the server applies its own defaults for
/// anything left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpHealthCheck {
    /// Seconds between probes.
    pub check_interval_sec: Option<i64>,

    /// Human-readable description.
    pub description: Option<String>,

    /// Consecutive successes before a backend is marked healthy.
    pub healthy_threshold: Option<i64>,

    /// Value of the Host header used by the probe.
    pub host: Option<String>,

    /// Resource name, unique within the project.
    pub name: Option<String>,

    /// TCP port the probe connects to.
    pub port: Option<i64>,

    /// Request path of the probe.
    pub request_path: Option<String>,

    /// Seconds to wait before a probe is considered failed.
    pub timeout_sec: Option<i64>,

    /// Consecutive failures before a backend is marked unhealthy.
    pub unhealthy_threshold: Option<i64>,

    /// Output only. RFC 3339 creation timestamp.
    pub creation_timestamp: Option<String>,

    /// Owning project.
    pub project: Option<String>,

    /// Output only. Server-defined URL of this resource.
    pub self_link: Option<String>,
}

impl HttpHealthCheck {
    /// Create a health check with its identity fields set.
    pub fn new(project: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the probe interval.
    pub fn with_check_interval_sec(mut self, seconds: i64) -> Self {
        self.check_interval_sec = Some(seconds);
        self
    }

    /// Builder method to set the probed host header.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Builder method to set the probed port.
    pub fn with_port(mut self, port: i64) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set the request path.
    pub fn with_request_path(mut self, path: impl Into<String>) -> Self {
        self.request_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_identity_only() {
        let check = HttpHealthCheck::new("my-project", "probe-a");
        assert_eq!(check.project.as_deref(), Some("my-project"));
        assert_eq!(check.name.as_deref(), Some("probe-a"));
        assert_eq!(check.check_interval_sec, None);
        assert_eq!(check.self_link, None);
    }

    #[test]
    fn test_explicit_zero_is_preserved() {
        // Zero is a real value, distinct from unset.
        let check = HttpHealthCheck::new("p", "n").with_port(0);
        assert_eq!(check.port, Some(0));
        assert_ne!(check.port, None);
    }

    #[test]
    fn test_serde_skips_nothing_silently() {
        let check = HttpHealthCheck::new("p", "n").with_host("example.com");
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["host"], "example.com");
        assert!(json["port"].is_null());
    }
}
