//! VPC network resource model.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A VPC network. Global resource: identified by `project` and `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Human-readable description.
    pub description: Option<String>,

    /// Output only. Gateway address for default routes.
    pub gateway_ipv4: Option<String>,

    /// Output only. Legacy-mode IPv4 range.
    pub ipv4_range: Option<String>,

    /// Resource name, unique within the project.
    pub name: Option<String>,

    /// Whether subnetworks are created automatically in every region.
    pub auto_create_subnetworks: Option<bool>,

    /// Dynamic routing behaviour of the network.
    pub routing_config: Option<RoutingConfig>,

    /// Owning project.
    pub project: Option<String>,

    /// Output only. Server-defined URL of this resource.
    pub self_link: Option<String>,
}

impl Network {
    /// Create a network with its identity fields set.
    pub fn new(project: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the routing config.
    pub fn with_routing_mode(mut self, mode: RoutingMode) -> Self {
        self.routing_config = Some(RoutingConfig {
            routing_mode: Some(mode),
        });
        self
    }

    /// Builder method to set auto subnetwork creation.
    pub fn with_auto_create_subnetworks(mut self, auto: bool) -> Self {
        self.auto_create_subnetworks = Some(auto);
        self
    }
}

/// Dynamic routing configuration of a [`Network`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Scope of advertised routes.
    pub routing_mode: Option<RoutingMode>,
}

/// Scope of routes advertised by cloud routers on a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingMode {
    /// Routers advertise subnetwork routes from their own region only.
    Regional,
    /// Routers advertise subnetwork routes from all regions.
    Global,
}

impl RoutingMode {
    /// The symbolic name used on the wire and in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regional => "REGIONAL",
            Self::Global => "GLOBAL",
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutingMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REGIONAL" => Ok(Self::Regional),
            "GLOBAL" => Ok(Self::Global),
            other => Err(ParseError::UnknownEnum {
                field: "routing_mode",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_mode_symbolic_names_roundtrip() {
        for mode in [RoutingMode::Regional, RoutingMode::Global] {
            let parsed: RoutingMode = mode.as_str().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_routing_mode_rejects_unknown_name() {
        let err = "ZONAL".parse::<RoutingMode>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownEnum { field, .. } if field == "routing_mode"));
    }

    #[test]
    fn test_empty_routing_config_is_distinct_from_absent() {
        let network = Network::new("p", "net");
        assert_eq!(network.routing_config, None);

        let with_empty = Network {
            routing_config: Some(RoutingConfig::default()),
            ..Network::new("p", "net")
        };
        assert_ne!(with_empty.routing_config, None);
        assert_eq!(with_empty.routing_config.unwrap().routing_mode, None);
    }
}
