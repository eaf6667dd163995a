//! Generated gRPC code and converters for cloudconn.
//!
//! This crate contains:
//! - Generated protobuf message types (checked in under `src/gen`, so builds
//!   never need protoc; the sources live in the workspace `proto/` directory)
//! - Generated gRPC client stubs
//! - Converters between wire messages and the resource models in
//!   `cloudconn-core`
//! - A closed registry for unpacking `google.protobuf.Any` payloads

pub mod any;
pub mod convert;
pub mod error;

/// Generated protobuf types and services.
pub mod pb {
    /// Compute control-plane messages (`cloudconn.compute.v1`).
    pub mod compute {
        include!("gen/cloudconn.compute.v1.rs");
    }
    /// Eventarc control-plane messages (`cloudconn.eventarc.v1`).
    pub mod eventarc {
        include!("gen/cloudconn.eventarc.v1.rs");
    }
    /// Game-services control-plane messages (`cloudconn.gameservices.v1`).
    pub mod gameservices {
        include!("gen/cloudconn.gameservices.v1.rs");
    }
}

pub use error::ConvertError;

// Re-export commonly used client stubs
pub use pb::compute::http_health_check_service_client::HttpHealthCheckServiceClient;
pub use pb::compute::network_service_client::NetworkServiceClient;
pub use pb::eventarc::trigger_service_client::TriggerServiceClient;
pub use pb::gameservices::realm_service_client::RealmServiceClient;
