//! Event trigger resource model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An event trigger routing matched events to a destination. Regional
/// resource: identified by `project`, `location` and `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Resource name, unique within project and location.
    pub name: Option<String>,

    /// Output only. RFC 3339 creation timestamp.
    pub create_time: Option<String>,

    /// Output only. RFC 3339 last-update timestamp.
    pub update_time: Option<String>,

    /// IAM service account email the trigger runs as.
    pub service_account: Option<String>,

    /// Where matched events are delivered.
    pub destination: Option<Destination>,

    /// Transport layer carrying the events.
    pub transport: Option<Transport>,

    /// User labels.
    pub labels: Option<HashMap<String, String>>,

    /// Output only. Server-computed checksum for optimistic concurrency.
    pub etag: Option<String>,

    /// Event filters; all criteria must match for the trigger to fire.
    pub matching_criteria: Option<Vec<MatchingCriteria>>,

    /// Owning project.
    pub project: Option<String>,

    /// Region of the trigger.
    pub location: Option<String>,
}

impl Trigger {
    /// Create a trigger with its identity fields set.
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            project: Some(project.into()),
            location: Some(location.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the destination.
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Builder method to add one matching criterion.
    pub fn with_criterion(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.matching_criteria
            .get_or_insert_with(Vec::new)
            .push(MatchingCriteria {
                attribute: Some(attribute.into()),
                value: Some(value.into()),
            });
        self
    }
}

/// Delivery target of a [`Trigger`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Cloud Run service receiving the events.
    pub cloud_run_service: Option<CloudRunService>,
}

/// A Cloud Run service destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudRunService {
    /// Name of the service.
    pub service: Option<String>,

    /// Relative path on the service the events are sent to.
    pub path: Option<String>,

    /// Region the service runs in.
    pub region: Option<String>,
}

/// Transport layer of a [`Trigger`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    /// Pub/Sub topic and subscription carrying the events.
    pub pubsub: Option<Pubsub>,
}

/// Pub/Sub transport details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pubsub {
    /// Topic events are published to.
    pub topic: Option<String>,

    /// Output only. Subscription created by the service.
    pub subscription: Option<String>,
}

/// A single attribute/value event filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingCriteria {
    /// Event attribute to match (e.g. "type").
    pub attribute: Option<String>,

    /// Exact value the attribute must carry.
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_criterion_preserves_order() {
        let trigger = Trigger::new("p", "us-central1", "t")
            .with_criterion("type", "google.cloud.pubsub.topic.v1.messagePublished")
            .with_criterion("source", "//pubsub.googleapis.com");

        let criteria = trigger.matching_criteria.unwrap();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0].attribute.as_deref(), Some("type"));
        assert_eq!(criteria[1].attribute.as_deref(), Some("source"));
    }

    #[test]
    fn test_new_leaves_output_fields_unset() {
        let trigger = Trigger::new("p", "us-central1", "t");
        assert_eq!(trigger.create_time, None);
        assert_eq!(trigger.etag, None);
        assert_eq!(trigger.matching_criteria, None);
    }
}
