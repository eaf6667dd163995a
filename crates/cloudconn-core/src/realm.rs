//! Game-services realm resource model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A realm grouping game server clusters. Regional resource: identified by
/// `project`, `location` and `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    /// Resource name, unique within project and location.
    pub name: Option<String>,

    /// Output only. RFC 3339 creation timestamp.
    pub create_time: Option<String>,

    /// Output only. RFC 3339 last-update timestamp.
    pub update_time: Option<String>,

    /// User labels.
    pub labels: Option<HashMap<String, String>>,

    /// IANA time zone used for scheduling within the realm (e.g.
    /// "America/New_York").
    pub time_zone: Option<String>,

    /// Human-readable description.
    pub description: Option<String>,

    /// Region of the realm.
    pub location: Option<String>,

    /// Owning project.
    pub project: Option<String>,
}

impl Realm {
    /// Create a realm with its identity fields set.
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

    /// Builder method to set the time zone.
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    /// Builder method to set one label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_accumulate() {
        let realm = Realm::new("p", "us-central1", "r")
            .with_label("env", "prod")
            .with_label("team", "platform");
        let labels = realm.labels.unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels["env"], "prod");
    }

    #[test]
    fn test_new_leaves_labels_absent() {
        let realm = Realm::new("p", "us-central1", "r");
        assert_eq!(realm.labels, None);
    }
}
