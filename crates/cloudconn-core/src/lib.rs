//! Cloudconn Core Resource Models
//!
//! This crate contains pure resource models with no dependencies on:
//! - Network/gRPC
//! - Protobuf
//! - Runtime specifics
//!
//! Every optional field is an explicit `Option`: `None` means the field was
//! never set and must stay absent on the wire, while `Some` carries a value
//! even when that value is zero or empty. Output-only fields (timestamps,
//! self links, etags) are populated from server responses and never sent.

pub mod error;
pub mod health_check;
pub mod network;
pub mod realm;
pub mod trigger;

// Re-export commonly used types
pub use error::ParseError;
pub use health_check::HttpHealthCheck;
pub use network::{Network, RoutingConfig, RoutingMode};
pub use realm::Realm;
pub use trigger::Trigger;
