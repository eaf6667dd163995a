//! gRPC service clients for the cloudconn control plane.
//!
//! One [`Connector`](grpc::Connector) owns the channel and credential
//! configuration; per-resource-kind clients borrow the channel and expose the
//! three control-plane operations (`apply`, `delete`, `list`). Each call
//! issues exactly one RPC; retries, backoff and auth token exchange live in
//! the transport underneath.

pub mod error;
pub mod grpc;

pub use error::ClientError;
pub use grpc::{Connector, HttpHealthCheckClient, NetworkClient, RealmClient, TriggerClient};
