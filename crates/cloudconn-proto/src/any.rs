//! Closed registry for `google.protobuf.Any` payloads.
//!
//! The control plane hands back resources as type-tagged `Any` envelopes.
//! Instead of reflective unpacking, every decodable type is enumerated here;
//! a payload declaring any other type is rejected at the boundary.

use prost::Message;
use prost_types::Any;

use crate::error::ConvertError;
use crate::pb;
use cloudconn_core::{HttpHealthCheck, Network, Realm, Trigger};

/// Fully qualified wire type of [`HttpHealthCheck`].
pub const HTTP_HEALTH_CHECK_TYPE: &str = "cloudconn.compute.v1.HttpHealthCheck";
/// Fully qualified wire type of [`Network`].
pub const NETWORK_TYPE: &str = "cloudconn.compute.v1.Network";
/// Fully qualified wire type of [`Trigger`].
pub const TRIGGER_TYPE: &str = "cloudconn.eventarc.v1.Trigger";
/// Fully qualified wire type of [`Realm`].
pub const REALM_TYPE: &str = "cloudconn.gameservices.v1.Realm";

// Type URLs look like "type.googleapis.com/cloudconn.compute.v1.Network";
// only the part after the last '/' names the message type.
fn type_name(type_url: &str) -> &str {
    type_url.rsplit('/').next().unwrap_or(type_url)
}

/// Unpack `any` as the wire message named by `expected`.
///
/// Fails with [`ConvertError::TypeMismatch`] when the payload declares a
/// different type, and with [`ConvertError::Decode`] when the bytes do not
/// parse as that message.
pub fn unpack<M: Message + Default>(any: &Any, expected: &'static str) -> Result<M, ConvertError> {
    let actual = type_name(&any.type_url);
    if actual != expected {
        return Err(ConvertError::TypeMismatch {
            expected,
            actual: actual.to_string(),
        });
    }
    M::decode(any.value.as_slice()).map_err(ConvertError::from)
}

/// Pack `message` into an `Any` envelope under `type_name`.
pub fn pack<M: Message>(type_name: &str, message: &M) -> Any {
    Any {
        type_url: format!("type.googleapis.com/{type_name}"),
        value: message.encode_to_vec(),
    }
}

/// Decode an `Any` declaring [`HTTP_HEALTH_CHECK_TYPE`] into its model.
pub fn http_health_check_from_any(any: &Any) -> Result<HttpHealthCheck, ConvertError> {
    let wire: pb::compute::HttpHealthCheck = unpack(any, HTTP_HEALTH_CHECK_TYPE)?;
    Ok(wire.into())
}

/// Decode an `Any` declaring [`NETWORK_TYPE`] into its model.
pub fn network_from_any(any: &Any) -> Result<Network, ConvertError> {
    let wire: pb::compute::Network = unpack(any, NETWORK_TYPE)?;
    wire.try_into()
}

/// Decode an `Any` declaring [`TRIGGER_TYPE`] into its model.
pub fn trigger_from_any(any: &Any) -> Result<Trigger, ConvertError> {
    let wire: pb::eventarc::Trigger = unpack(any, TRIGGER_TYPE)?;
    Ok(wire.into())
}

/// Decode an `Any` declaring [`REALM_TYPE`] into its model.
pub fn realm_from_any(any: &Any) -> Result<Realm, ConvertError> {
    let wire: pb::gameservices::Realm = unpack(any, REALM_TYPE)?;
    Ok(wire.into())
}

/// A resource decoded from an `Any` envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    HttpHealthCheck(HttpHealthCheck),
    Network(Network),
    Trigger(Trigger),
    Realm(Realm),
}

impl Resource {
    /// Decode `any` into whichever resource kind it declares.
    ///
    /// The registry is closed: a payload declaring a type outside the four
    /// known kinds fails with [`ConvertError::UnknownType`].
    pub fn from_any(any: &Any) -> Result<Self, ConvertError> {
        match type_name(&any.type_url) {
            HTTP_HEALTH_CHECK_TYPE => http_health_check_from_any(any).map(Self::HttpHealthCheck),
            NETWORK_TYPE => network_from_any(any).map(Self::Network),
            TRIGGER_TYPE => trigger_from_any(any).map(Self::Trigger),
            REALM_TYPE => realm_from_any(any).map(Self::Realm),
            other => Err(ConvertError::UnknownType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_roundtrip() {
        let network = Network::new("my-project", "net");
        let wire: pb::compute::Network = network.clone().into();
        let any = pack(NETWORK_TYPE, &wire);

        match Resource::from_any(&any).unwrap() {
            Resource::Network(back) => assert_eq!(back, network),
            other => panic!("unexpected resource: {other:?}"),
        }
    }

    #[test]
    fn test_unpack_each_kind() {
        let check: pb::compute::HttpHealthCheck = HttpHealthCheck::new("p", "c").into();
        let trigger: pb::eventarc::Trigger = Trigger::new("p", "l", "t").into();
        let realm: pb::gameservices::Realm = Realm::new("p", "l", "r").into();

        assert!(matches!(
            Resource::from_any(&pack(HTTP_HEALTH_CHECK_TYPE, &check)).unwrap(),
            Resource::HttpHealthCheck(_)
        ));
        assert!(matches!(
            Resource::from_any(&pack(TRIGGER_TYPE, &trigger)).unwrap(),
            Resource::Trigger(_)
        ));
        assert!(matches!(
            Resource::from_any(&pack(REALM_TYPE, &realm)).unwrap(),
            Resource::Realm(_)
        ));
    }

    #[test]
    fn test_mismatched_type_is_rejected() {
        let wire: pb::compute::Network = Network::new("p", "net").into();
        let any = pack(NETWORK_TYPE, &wire);

        let err = unpack::<pb::gameservices::Realm>(&any, REALM_TYPE).unwrap_err();
        assert!(matches!(err, ConvertError::TypeMismatch { expected, .. } if expected == REALM_TYPE));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let any = Any {
            type_url: "type.googleapis.com/cloudconn.compute.v1.Subnetwork".to_string(),
            value: Vec::new(),
        };
        let err = Resource::from_any(&any).unwrap_err();
        assert!(matches!(err, ConvertError::UnknownType(name) if name.ends_with("Subnetwork")));
    }

    #[test]
    fn test_bare_type_url_is_accepted() {
        // Some producers omit the domain prefix entirely.
        let wire: pb::gameservices::Realm = Realm::new("p", "l", "r").into();
        let any = Any {
            type_url: REALM_TYPE.to_string(),
            value: wire.encode_to_vec(),
        };
        assert!(matches!(
            Resource::from_any(&any).unwrap(),
            Resource::Realm(_)
        ));
    }
}
