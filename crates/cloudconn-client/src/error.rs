//! Error types for the control-plane clients.

use cloudconn_proto::ConvertError;
use thiserror::Error;

/// Errors that can occur when using the control-plane clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to establish connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// gRPC error from the server, propagated unchanged.
    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::Status),

    /// A response carried a wire value the model cannot represent.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),
}
