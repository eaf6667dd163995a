//! Converters between wire messages and resource models.
//!
//! Model -> wire is infallible: typed models cannot hold values the wire
//! cannot carry. Wire -> model is fallible where the wire can carry enum
//! integers outside the declared value set; those fail with
//! [`ConvertError::UnknownEnum`] instead of passing through unresolved.
//!
//! A `None` model field stays unset on the wire, and an unset wire field
//! comes back as `None`; explicit zero and empty-string values survive both
//! directions. Wire enum value 0 (`UNSPECIFIED`) decodes as `None`.

use std::collections::HashMap;

use crate::error::ConvertError;
use crate::pb;
use cloudconn_core::trigger::{CloudRunService, Destination, MatchingCriteria, Pubsub, Transport};
use cloudconn_core::{HttpHealthCheck, Network, Realm, RoutingConfig, RoutingMode, Trigger};

// Proto3 maps have no presence; an empty map decodes as absent.
fn labels_from_wire(labels: HashMap<String, String>) -> Option<HashMap<String, String>> {
    if labels.is_empty() {
        None
    } else {
        Some(labels)
    }
}

// ============================================================================
// HttpHealthCheck conversions
// ============================================================================

impl From<HttpHealthCheck> for pb::compute::HttpHealthCheck {
    fn from(check: HttpHealthCheck) -> Self {
        Self {
            check_interval_sec: check.check_interval_sec,
            description: check.description,
            healthy_threshold: check.healthy_threshold,
            host: check.host,
            name: check.name,
            port: check.port,
            request_path: check.request_path,
            timeout_sec: check.timeout_sec,
            unhealthy_threshold: check.unhealthy_threshold,
            creation_timestamp: check.creation_timestamp,
            project: check.project,
            self_link: check.self_link,
        }
    }
}

impl From<pb::compute::HttpHealthCheck> for HttpHealthCheck {
    fn from(wire: pb::compute::HttpHealthCheck) -> Self {
        Self {
            check_interval_sec: wire.check_interval_sec,
            description: wire.description,
            healthy_threshold: wire.healthy_threshold,
            host: wire.host,
            name: wire.name,
            port: wire.port,
            request_path: wire.request_path,
            timeout_sec: wire.timeout_sec,
            unhealthy_threshold: wire.unhealthy_threshold,
            creation_timestamp: wire.creation_timestamp,
            project: wire.project,
            self_link: wire.self_link,
        }
    }
}

// ============================================================================
// Network conversions
// ============================================================================

impl From<RoutingMode> for pb::compute::network::routing_config::RoutingMode {
    fn from(mode: RoutingMode) -> Self {
        match mode {
            RoutingMode::Regional => Self::Regional,
            RoutingMode::Global => Self::Global,
        }
    }
}

impl From<RoutingConfig> for pb::compute::network::RoutingConfig {
    fn from(config: RoutingConfig) -> Self {
        Self {
            routing_mode: config
                .routing_mode
                .map(|m| pb::compute::network::routing_config::RoutingMode::from(m) as i32),
        }
    }
}

impl TryFrom<pb::compute::network::RoutingConfig> for RoutingConfig {
    type Error = ConvertError;

    fn try_from(wire: pb::compute::network::RoutingConfig) -> Result<Self, Self::Error> {
        use crate::pb::compute::network::routing_config::RoutingMode as WireMode;

        let routing_mode = match wire.routing_mode {
            None => None,
            Some(raw) => match WireMode::try_from(raw) {
                Ok(WireMode::Unspecified) => None,
                Ok(WireMode::Regional) => Some(RoutingMode::Regional),
                Ok(WireMode::Global) => Some(RoutingMode::Global),
                Err(_) => {
                    return Err(ConvertError::UnknownEnum {
                        field: "Network.routing_config.routing_mode",
                        value: raw,
                    });
                }
            },
        };
        Ok(Self { routing_mode })
    }
}

impl From<Network> for pb::compute::Network {
    fn from(network: Network) -> Self {
        Self {
            description: network.description,
            gateway_ipv4: network.gateway_ipv4,
            ipv4_range: network.ipv4_range,
            name: network.name,
            auto_create_subnetworks: network.auto_create_subnetworks,
            routing_config: network.routing_config.map(Into::into),
            project: network.project,
            self_link: network.self_link,
        }
    }
}

impl TryFrom<pb::compute::Network> for Network {
    type Error = ConvertError;

    fn try_from(wire: pb::compute::Network) -> Result<Self, Self::Error> {
        Ok(Self {
            description: wire.description,
            gateway_ipv4: wire.gateway_ipv4,
            ipv4_range: wire.ipv4_range,
            name: wire.name,
            auto_create_subnetworks: wire.auto_create_subnetworks,
            routing_config: wire.routing_config.map(TryInto::try_into).transpose()?,
            project: wire.project,
            self_link: wire.self_link,
        })
    }
}

// ============================================================================
// Trigger conversions
// ============================================================================

impl From<CloudRunService> for pb::eventarc::trigger::destination::CloudRunService {
    fn from(service: CloudRunService) -> Self {
        Self {
            service: service.service,
            path: service.path,
            region: service.region,
        }
    }
}

impl From<pb::eventarc::trigger::destination::CloudRunService> for CloudRunService {
    fn from(wire: pb::eventarc::trigger::destination::CloudRunService) -> Self {
        Self {
            service: wire.service,
            path: wire.path,
            region: wire.region,
        }
    }
}

impl From<Destination> for pb::eventarc::trigger::Destination {
    fn from(destination: Destination) -> Self {
        Self {
            cloud_run_service: destination.cloud_run_service.map(Into::into),
        }
    }
}

impl From<pb::eventarc::trigger::Destination> for Destination {
    fn from(wire: pb::eventarc::trigger::Destination) -> Self {
        Self {
            cloud_run_service: wire.cloud_run_service.map(Into::into),
        }
    }
}

impl From<Pubsub> for pb::eventarc::trigger::transport::Pubsub {
    fn from(pubsub: Pubsub) -> Self {
        Self {
            topic: pubsub.topic,
            subscription: pubsub.subscription,
        }
    }
}

impl From<pb::eventarc::trigger::transport::Pubsub> for Pubsub {
    fn from(wire: pb::eventarc::trigger::transport::Pubsub) -> Self {
        Self {
            topic: wire.topic,
            subscription: wire.subscription,
        }
    }
}

impl From<Transport> for pb::eventarc::trigger::Transport {
    fn from(transport: Transport) -> Self {
        Self {
            pubsub: transport.pubsub.map(Into::into),
        }
    }
}

impl From<pb::eventarc::trigger::Transport> for Transport {
    fn from(wire: pb::eventarc::trigger::Transport) -> Self {
        Self {
            pubsub: wire.pubsub.map(Into::into),
        }
    }
}

impl From<MatchingCriteria> for pb::eventarc::trigger::MatchingCriteria {
    fn from(criteria: MatchingCriteria) -> Self {
        Self {
            attribute: criteria.attribute,
            value: criteria.value,
        }
    }
}

impl From<pb::eventarc::trigger::MatchingCriteria> for MatchingCriteria {
    fn from(wire: pb::eventarc::trigger::MatchingCriteria) -> Self {
        Self {
            attribute: wire.attribute,
            value: wire.value,
        }
    }
}

impl From<Trigger> for pb::eventarc::Trigger {
    fn from(trigger: Trigger) -> Self {
        Self {
            name: trigger.name,
            create_time: trigger.create_time,
            update_time: trigger.update_time,
            service_account: trigger.service_account,
            destination: trigger.destination.map(Into::into),
            transport: trigger.transport.map(Into::into),
            labels: trigger.labels.unwrap_or_default(),
            etag: trigger.etag,
            matching_criteria: trigger
                .matching_criteria
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            project: trigger.project,
            location: trigger.location,
        }
    }
}

impl From<pb::eventarc::Trigger> for Trigger {
    fn from(wire: pb::eventarc::Trigger) -> Self {
        let matching_criteria = if wire.matching_criteria.is_empty() {
            None
        } else {
            Some(wire.matching_criteria.into_iter().map(Into::into).collect())
        };
        Self {
            name: wire.name,
            create_time: wire.create_time,
            update_time: wire.update_time,
            service_account: wire.service_account,
            destination: wire.destination.map(Into::into),
            transport: wire.transport.map(Into::into),
            labels: labels_from_wire(wire.labels),
            etag: wire.etag,
            matching_criteria,
            project: wire.project,
            location: wire.location,
        }
    }
}

// ============================================================================
// Realm conversions
// ============================================================================

impl From<Realm> for pb::gameservices::Realm {
    fn from(realm: Realm) -> Self {
        Self {
            name: realm.name,
            create_time: realm.create_time,
            update_time: realm.update_time,
            labels: realm.labels.unwrap_or_default(),
            time_zone: realm.time_zone,
            description: realm.description,
            location: realm.location,
            project: realm.project,
        }
    }
}

impl From<pb::gameservices::Realm> for Realm {
    fn from(wire: pb::gameservices::Realm) -> Self {
        Self {
            name: wire.name,
            create_time: wire.create_time,
            update_time: wire.update_time,
            labels: labels_from_wire(wire.labels),
            time_zone: wire.time_zone,
            description: wire.description,
            location: wire.location,
            project: wire.project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    fn full_health_check() -> HttpHealthCheck {
        HttpHealthCheck {
            check_interval_sec: Some(5),
            description: Some("edge probe".to_string()),
            healthy_threshold: Some(2),
            host: Some("example.com".to_string()),
            name: Some("probe-a".to_string()),
            port: Some(8080),
            request_path: Some("/healthz".to_string()),
            timeout_sec: Some(5),
            unhealthy_threshold: Some(3),
            creation_timestamp: Some("2024-01-01T00:00:00Z".to_string()),
            project: Some("my-project".to_string()),
            self_link: Some("https://example/self".to_string()),
        }
    }

    fn full_network() -> Network {
        Network {
            description: Some("shared vpc".to_string()),
            gateway_ipv4: Some("10.0.0.1".to_string()),
            ipv4_range: Some("10.0.0.0/16".to_string()),
            name: Some("net".to_string()),
            auto_create_subnetworks: Some(false),
            routing_config: Some(RoutingConfig {
                routing_mode: Some(RoutingMode::Global),
            }),
            project: Some("my-project".to_string()),
            self_link: Some("https://example/networks/net".to_string()),
        }
    }

    fn full_realm() -> Realm {
        Realm {
            name: Some("r".to_string()),
            create_time: Some("2024-01-01T00:00:00Z".to_string()),
            update_time: Some("2024-01-02T00:00:00Z".to_string()),
            labels: Some(HashMap::from([("env".to_string(), "prod".to_string())])),
            time_zone: Some("America/New_York".to_string()),
            description: Some("east coast fleet".to_string()),
            location: Some("us-east1".to_string()),
            project: Some("my-project".to_string()),
        }
    }

    fn full_trigger() -> Trigger {
        Trigger {
            name: Some("t".to_string()),
            create_time: Some("2024-01-01T00:00:00Z".to_string()),
            update_time: Some("2024-01-02T00:00:00Z".to_string()),
            service_account: Some("svc@my-project.iam".to_string()),
            destination: Some(Destination {
                cloud_run_service: Some(CloudRunService {
                    service: Some("receiver".to_string()),
                    path: Some("/events".to_string()),
                    region: Some("us-central1".to_string()),
                }),
            }),
            transport: Some(Transport {
                pubsub: Some(Pubsub {
                    topic: Some("projects/p/topics/t".to_string()),
                    subscription: Some("projects/p/subscriptions/s".to_string()),
                }),
            }),
            labels: Some(HashMap::from([("env".to_string(), "prod".to_string())])),
            etag: Some("abc123".to_string()),
            matching_criteria: Some(vec![
                MatchingCriteria {
                    attribute: Some("type".to_string()),
                    value: Some("created".to_string()),
                },
                MatchingCriteria {
                    attribute: Some("source".to_string()),
                    value: Some("storage".to_string()),
                },
            ]),
            project: Some("my-project".to_string()),
            location: Some("us-central1".to_string()),
        }
    }

    #[test]
    fn test_health_check_roundtrip() {
        let check = full_health_check();
        let wire: pb::compute::HttpHealthCheck = check.clone().into();
        let back: HttpHealthCheck = wire.into();
        assert_eq!(check, back);
    }

    #[test]
    fn test_default_model_encodes_to_nothing() {
        // Absence law: an all-None model must not set a single wire field.
        let wire: pb::compute::HttpHealthCheck = HttpHealthCheck::default().into();
        assert_eq!(wire.encoded_len(), 0);

        let wire: pb::compute::Network = Network::default().into();
        assert_eq!(wire.encoded_len(), 0);

        let wire: pb::eventarc::Trigger = Trigger::default().into();
        assert_eq!(wire.encoded_len(), 0);

        let wire: pb::gameservices::Realm = Realm::default().into();
        assert_eq!(wire.encoded_len(), 0);
    }

    #[test]
    fn test_health_check_sparse_fields() {
        let check = HttpHealthCheck {
            check_interval_sec: Some(30),
            host: Some("example.com".to_string()),
            ..HttpHealthCheck::default()
        };
        let wire: pb::compute::HttpHealthCheck = check.clone().into();
        assert_eq!(wire.check_interval_sec, Some(30));
        assert_eq!(wire.host.as_deref(), Some("example.com"));
        assert_eq!(wire.port, None);
        assert_eq!(wire.name, None);
        assert_eq!(wire.request_path, None);

        let back: HttpHealthCheck = wire.into();
        assert_eq!(back, check);
    }

    #[test]
    fn test_explicit_zero_survives_roundtrip() {
        // Zero is a value, not absence.
        let check = HttpHealthCheck {
            port: Some(0),
            host: Some(String::new()),
            ..HttpHealthCheck::default()
        };
        let wire: pb::compute::HttpHealthCheck = check.clone().into();
        assert_eq!(wire.port, Some(0));
        assert_eq!(wire.host.as_deref(), Some(""));
        assert!(wire.encoded_len() > 0);

        let decoded = pb::compute::HttpHealthCheck::decode(wire.encode_to_vec().as_slice()).unwrap();
        let back: HttpHealthCheck = decoded.into();
        assert_eq!(back, check);
    }

    #[test]
    fn test_network_roundtrip() {
        // Every field populated so a crossed-up pair of fields cannot hide.
        let network = full_network();
        let wire: pb::compute::Network = network.clone().into();
        assert_eq!(wire.gateway_ipv4.as_deref(), Some("10.0.0.1"));
        assert_eq!(wire.ipv4_range.as_deref(), Some("10.0.0.0/16"));

        let back = Network::try_from(wire).unwrap();
        assert_eq!(back, network);
    }

    #[test]
    fn test_network_regional_routing() {
        let network = Network::new("my-project", "net").with_routing_mode(RoutingMode::Regional);
        let wire: pb::compute::Network = network.clone().into();

        let config = wire.routing_config.expect("routing_config set");
        assert_eq!(
            config.routing_mode,
            Some(pb::compute::network::routing_config::RoutingMode::Regional as i32)
        );

        let back = Network::try_from(wire).unwrap();
        assert_eq!(back, network);
    }

    #[test]
    fn test_network_absent_routing_config_stays_absent() {
        let network = Network::new("my-project", "net");
        let wire: pb::compute::Network = network.into();
        assert_eq!(wire.routing_config, None);
    }

    #[test]
    fn test_network_empty_routing_config_is_present_but_empty() {
        let network = Network {
            routing_config: Some(RoutingConfig::default()),
            ..Network::new("my-project", "net")
        };
        let wire: pb::compute::Network = network.clone().into();
        let config = wire.routing_config.expect("routing_config set");
        assert_eq!(config.routing_mode, None);

        let back = Network::try_from(wire).unwrap();
        assert_eq!(back.routing_config, Some(RoutingConfig::default()));
    }

    #[test]
    fn test_unknown_routing_mode_fails() {
        let wire = pb::compute::Network {
            routing_config: Some(pb::compute::network::RoutingConfig {
                routing_mode: Some(99),
            }),
            ..Default::default()
        };
        let err = Network::try_from(wire).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownEnum { value: 99, .. }
        ));
    }

    #[test]
    fn test_unspecified_routing_mode_decodes_as_absent() {
        let wire = pb::compute::Network {
            routing_config: Some(pb::compute::network::RoutingConfig { routing_mode: Some(0) }),
            ..Default::default()
        };
        let network = Network::try_from(wire).unwrap();
        assert_eq!(network.routing_config.unwrap().routing_mode, None);
    }

    #[test]
    fn test_routing_mode_bijection() {
        for mode in [RoutingMode::Regional, RoutingMode::Global] {
            let wire = pb::compute::network::RoutingConfig {
                routing_mode: Some(
                    pb::compute::network::routing_config::RoutingMode::from(mode) as i32,
                ),
            };
            let back = RoutingConfig::try_from(wire).unwrap();
            assert_eq!(back.routing_mode, Some(mode));
        }
    }

    #[test]
    fn test_trigger_roundtrip() {
        let trigger = full_trigger();
        let wire: pb::eventarc::Trigger = trigger.clone().into();
        let back: Trigger = wire.into();
        assert_eq!(trigger, back);
    }

    #[test]
    fn test_trigger_criteria_preserve_order() {
        let trigger = full_trigger();
        let wire: pb::eventarc::Trigger = trigger.into();
        assert_eq!(wire.matching_criteria.len(), 2);
        assert_eq!(wire.matching_criteria[0].attribute.as_deref(), Some("type"));
        assert_eq!(wire.matching_criteria[1].attribute.as_deref(), Some("source"));
    }

    #[test]
    fn test_trigger_absent_collections() {
        let trigger = Trigger::new("p", "us-central1", "t");
        let wire: pb::eventarc::Trigger = trigger.into();
        assert!(wire.matching_criteria.is_empty());
        assert!(wire.labels.is_empty());

        let back: Trigger = wire.into();
        assert_eq!(back.matching_criteria, None);
        assert_eq!(back.labels, None);
    }

    #[test]
    fn test_trigger_absent_nested_objects_stay_absent() {
        let trigger = Trigger::new("p", "us-central1", "t");
        let wire: pb::eventarc::Trigger = trigger.into();
        assert_eq!(wire.destination, None);
        assert_eq!(wire.transport, None);
    }

    #[test]
    fn test_realm_roundtrip() {
        let realm = full_realm();
        let wire: pb::gameservices::Realm = realm.clone().into();
        assert_eq!(wire.labels.len(), 1);
        assert_eq!(wire.time_zone.as_deref(), Some("America/New_York"));
        assert_eq!(wire.description.as_deref(), Some("east coast fleet"));

        let back: Realm = wire.into();
        assert_eq!(back, realm);
    }
}
