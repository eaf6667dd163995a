//! gRPC clients for the per-resource-kind control-plane services.

use tonic::transport::{Certificate, Channel, ClientTlsConfig, Identity};
use tracing::{debug, info};

use cloudconn_core::{HttpHealthCheck, Network, Realm, Trigger};
use cloudconn_proto::pb::{compute, eventarc, gameservices};
use cloudconn_proto::{
    HttpHealthCheckServiceClient, NetworkServiceClient, RealmServiceClient, TriggerServiceClient,
};

use crate::error::ClientError;

/// Shared connection to the control plane.
///
/// Created once; per-kind clients clone the underlying channel, which is
/// cheap and safe. The `service_account_file` (empty string = ambient
/// credentials) is stamped on every request so the server can impersonate
/// the right identity.
#[derive(Debug, Clone)]
pub struct Connector {
    channel: Channel,
    service_account_file: String,
}

impl Connector {
    /// Connect to the control plane.
    ///
    /// # Arguments
    /// * `endpoint` - The gRPC endpoint (e.g., "https://[::1]:50051")
    /// * `service_account_file` - Credential file path; empty = ambient credentials
    /// * `ca_cert` - Optional CA certificate for TLS
    /// * `client_identity` - Optional client cert+key tuple for mTLS
    pub async fn connect(
        endpoint: &str,
        service_account_file: &str,
        ca_cert: Option<&[u8]>,
        client_identity: Option<&(Vec<u8>, Vec<u8>)>,
    ) -> Result<Self, ClientError> {
        info!(
            endpoint = %endpoint,
            tls = ca_cert.is_some(),
            mtls = client_identity.is_some(),
            "Connecting to control plane"
        );

        let channel = match (ca_cert, client_identity) {
            // Full mTLS: CA cert + client identity
            (Some(ca), Some((cert, key))) => {
                let tls = ClientTlsConfig::new()
                    .ca_certificate(Certificate::from_pem(ca))
                    .identity(Identity::from_pem(cert, key));

                Channel::from_shared(endpoint.to_string())
                    .map_err(|e| ClientError::Connection(e.to_string()))?
                    .tls_config(tls)
                    .map_err(|e| ClientError::Connection(e.to_string()))?
                    .connect()
                    .await
                    .map_err(|e| ClientError::Connection(e.to_string()))?
            }
            // Server TLS only (no client cert)
            (Some(ca), None) => {
                let tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(ca));

                Channel::from_shared(endpoint.to_string())
                    .map_err(|e| ClientError::Connection(e.to_string()))?
                    .tls_config(tls)
                    .map_err(|e| ClientError::Connection(e.to_string()))?
                    .connect()
                    .await
                    .map_err(|e| ClientError::Connection(e.to_string()))?
            }
            // No TLS
            _ => Channel::from_shared(endpoint.to_string())
                .map_err(|e| ClientError::Connection(e.to_string()))?
                .connect()
                .await
                .map_err(|e| ClientError::Connection(e.to_string()))?,
        };

        Ok(Self {
            channel,
            service_account_file: service_account_file.to_string(),
        })
    }

    /// Client for the HttpHealthCheckService.
    pub fn http_health_checks(&self) -> HttpHealthCheckClient {
        HttpHealthCheckClient {
            inner: HttpHealthCheckServiceClient::new(self.channel.clone()),
            service_account_file: self.service_account_file.clone(),
        }
    }

    /// Client for the NetworkService.
    pub fn networks(&self) -> NetworkClient {
        NetworkClient {
            inner: NetworkServiceClient::new(self.channel.clone()),
            service_account_file: self.service_account_file.clone(),
        }
    }

    /// Client for the TriggerService.
    pub fn triggers(&self) -> TriggerClient {
        TriggerClient {
            inner: TriggerServiceClient::new(self.channel.clone()),
            service_account_file: self.service_account_file.clone(),
        }
    }

    /// Client for the RealmService.
    pub fn realms(&self) -> RealmClient {
        RealmClient {
            inner: RealmServiceClient::new(self.channel.clone()),
            service_account_file: self.service_account_file.clone(),
        }
    }
}

/// Client for the HttpHealthCheckService.
pub struct HttpHealthCheckClient {
    inner: HttpHealthCheckServiceClient<Channel>,
    service_account_file: String,
}

impl HttpHealthCheckClient {
    /// Create or update the health check and write the server's view,
    /// including output-only fields, back into `resource`.
    pub async fn apply(&mut self, resource: &mut HttpHealthCheck) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Applying http health check"
        );
        let request = health_check_apply_request(resource, &self.service_account_file);
        let response = self.inner.apply_http_health_check(request).await?;
        *resource = response.into_inner().into();
        Ok(())
    }

    /// Delete the health check. The same fields as `apply` are sent so the
    /// server can locate the resource; the response carries no body.
    pub async fn delete(&mut self, resource: &HttpHealthCheck) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Deleting http health check"
        );
        let request = health_check_delete_request(resource, &self.service_account_file);
        self.inner.delete_http_health_check(request).await?;
        Ok(())
    }

    /// List all health checks in `project`.
    pub async fn list(&mut self, project: &str) -> Result<Vec<HttpHealthCheck>, ClientError> {
        debug!(project, "Listing http health checks");
        let request = health_check_list_request(project, &self.service_account_file);
        let response = self.inner.list_http_health_check(request).await?;
        Ok(response
            .into_inner()
            .items
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

/// Client for the NetworkService.
pub struct NetworkClient {
    inner: NetworkServiceClient<Channel>,
    service_account_file: String,
}

impl NetworkClient {
    /// Create or update the network and write the server's view, including
    /// output-only fields, back into `resource`.
    pub async fn apply(&mut self, resource: &mut Network) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Applying network"
        );
        let request = network_apply_request(resource, &self.service_account_file);
        let response = self.inner.apply_network(request).await?;
        *resource = Network::try_from(response.into_inner())?;
        Ok(())
    }

    /// Delete the network.
    pub async fn delete(&mut self, resource: &Network) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Deleting network"
        );
        let request = network_delete_request(resource, &self.service_account_file);
        self.inner.delete_network(request).await?;
        Ok(())
    }

    /// List all networks in `project`.
    pub async fn list(&mut self, project: &str) -> Result<Vec<Network>, ClientError> {
        debug!(project, "Listing networks");
        let request = network_list_request(project, &self.service_account_file);
        let response = self.inner.list_network(request).await?;
        response
            .into_inner()
            .items
            .into_iter()
            .map(|item| Network::try_from(item).map_err(ClientError::from))
            .collect()
    }
}

/// Client for the TriggerService.
pub struct TriggerClient {
    inner: TriggerServiceClient<Channel>,
    service_account_file: String,
}

impl TriggerClient {
    /// Create or update the trigger and write the server's view, including
    /// output-only fields, back into `resource`.
    pub async fn apply(&mut self, resource: &mut Trigger) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            location = resource.location.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Applying trigger"
        );
        let request = trigger_apply_request(resource, &self.service_account_file);
        let response = self.inner.apply_trigger(request).await?;
        *resource = response.into_inner().into();
        Ok(())
    }

    /// Delete the trigger.
    pub async fn delete(&mut self, resource: &Trigger) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            location = resource.location.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Deleting trigger"
        );
        let request = trigger_delete_request(resource, &self.service_account_file);
        self.inner.delete_trigger(request).await?;
        Ok(())
    }

    /// List all triggers in `project` within `location`.
    pub async fn list(&mut self, project: &str, location: &str) -> Result<Vec<Trigger>, ClientError> {
        debug!(project, location, "Listing triggers");
        let request = trigger_list_request(project, location, &self.service_account_file);
        let response = self.inner.list_trigger(request).await?;
        Ok(response
            .into_inner()
            .items
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

/// Client for the RealmService.
pub struct RealmClient {
    inner: RealmServiceClient<Channel>,
    service_account_file: String,
}

impl RealmClient {
    /// Create or update the realm and write the server's view, including
    /// output-only fields, back into `resource`.
    pub async fn apply(&mut self, resource: &mut Realm) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            location = resource.location.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Applying realm"
        );
        let request = realm_apply_request(resource, &self.service_account_file);
        let response = self.inner.apply_realm(request).await?;
        *resource = response.into_inner().into();
        Ok(())
    }

    /// Delete the realm.
    pub async fn delete(&mut self, resource: &Realm) -> Result<(), ClientError> {
        debug!(
            project = resource.project.as_deref().unwrap_or(""),
            location = resource.location.as_deref().unwrap_or(""),
            name = resource.name.as_deref().unwrap_or(""),
            "Deleting realm"
        );
        let request = realm_delete_request(resource, &self.service_account_file);
        self.inner.delete_realm(request).await?;
        Ok(())
    }

    /// List all realms in `project` within `location`.
    pub async fn list(&mut self, project: &str, location: &str) -> Result<Vec<Realm>, ClientError> {
        debug!(project, location, "Listing realms");
        let request = realm_list_request(project, location, &self.service_account_file);
        let response = self.inner.list_realm(request).await?;
        Ok(response
            .into_inner()
            .items
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

// Request construction is kept out of the async paths so the mapping can be
// exercised without a server.

fn health_check_apply_request(
    resource: &HttpHealthCheck,
    service_account_file: &str,
) -> compute::ApplyHttpHealthCheckRequest {
    compute::ApplyHttpHealthCheckRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn health_check_delete_request(
    resource: &HttpHealthCheck,
    service_account_file: &str,
) -> compute::DeleteHttpHealthCheckRequest {
    compute::DeleteHttpHealthCheckRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn network_apply_request(
    resource: &Network,
    service_account_file: &str,
) -> compute::ApplyNetworkRequest {
    compute::ApplyNetworkRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn network_delete_request(
    resource: &Network,
    service_account_file: &str,
) -> compute::DeleteNetworkRequest {
    compute::DeleteNetworkRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn trigger_apply_request(
    resource: &Trigger,
    service_account_file: &str,
) -> eventarc::ApplyTriggerRequest {
    eventarc::ApplyTriggerRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn trigger_delete_request(
    resource: &Trigger,
    service_account_file: &str,
) -> eventarc::DeleteTriggerRequest {
    eventarc::DeleteTriggerRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn realm_apply_request(
    resource: &Realm,
    service_account_file: &str,
) -> gameservices::ApplyRealmRequest {
    gameservices::ApplyRealmRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn realm_delete_request(
    resource: &Realm,
    service_account_file: &str,
) -> gameservices::DeleteRealmRequest {
    gameservices::DeleteRealmRequest {
        resource: Some(resource.clone().into()),
        service_account_file: service_account_file.to_string(),
    }
}

fn health_check_list_request(
    project: &str,
    service_account_file: &str,
) -> compute::ListHttpHealthCheckRequest {
    compute::ListHttpHealthCheckRequest {
        project: project.to_string(),
        service_account_file: service_account_file.to_string(),
    }
}

fn network_list_request(project: &str, service_account_file: &str) -> compute::ListNetworkRequest {
    compute::ListNetworkRequest {
        project: project.to_string(),
        service_account_file: service_account_file.to_string(),
    }
}

fn trigger_list_request(
    project: &str,
    location: &str,
    service_account_file: &str,
) -> eventarc::ListTriggerRequest {
    eventarc::ListTriggerRequest {
        project: project.to_string(),
        location: location.to_string(),
        service_account_file: service_account_file.to_string(),
    }
}

fn realm_list_request(
    project: &str,
    location: &str,
    service_account_file: &str,
) -> gameservices::ListRealmRequest {
    gameservices::ListRealmRequest {
        project: project.to_string(),
        location: location.to_string(),
        service_account_file: service_account_file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudconn_core::RoutingMode;

    #[test]
    fn test_apply_request_wraps_mapped_resource() {
        let check = HttpHealthCheck::new("my-project", "probe-a").with_check_interval_sec(30);
        let request = health_check_apply_request(&check, "/etc/creds.json");

        assert_eq!(request.service_account_file, "/etc/creds.json");
        let resource = request.resource.expect("resource set");
        assert_eq!(resource.check_interval_sec, Some(30));
        assert_eq!(resource.name.as_deref(), Some("probe-a"));
    }

    #[test]
    fn test_delete_request_carries_same_identity_fields() {
        let network = Network::new("my-project", "net").with_routing_mode(RoutingMode::Global);
        let apply = network_apply_request(&network, "");
        let delete = network_delete_request(&network, "");
        assert_eq!(apply.resource, delete.resource);
        // Empty credential path means ambient credentials, still sent as-is.
        assert_eq!(delete.service_account_file, "");
    }

    #[test]
    fn test_trigger_requests_keep_location() {
        let trigger = Trigger::new("my-project", "us-central1", "t");
        let request = trigger_apply_request(&trigger, "");
        let resource = request.resource.expect("resource set");
        assert_eq!(resource.location.as_deref(), Some("us-central1"));
        assert_eq!(resource.project.as_deref(), Some("my-project"));
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_endpoint() {
        let err = Connector::connect("not a uri", "", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
    }

    #[test]
    fn test_global_list_requests_carry_project() {
        let request = health_check_list_request("my-project", "/etc/creds.json");
        assert_eq!(request.project, "my-project");
        assert_eq!(request.service_account_file, "/etc/creds.json");

        let request = network_list_request("my-project", "");
        assert_eq!(request.project, "my-project");
        assert_eq!(request.service_account_file, "");
    }

    #[test]
    fn test_regional_list_requests_carry_project_and_location() {
        let request = trigger_list_request("my-project", "us-central1", "creds.json");
        assert_eq!(request.project, "my-project");
        assert_eq!(request.location, "us-central1");
        assert_eq!(request.service_account_file, "creds.json");

        let request = realm_list_request("my-project", "us-east1", "");
        assert_eq!(request.project, "my-project");
        assert_eq!(request.location, "us-east1");
        assert_eq!(request.service_account_file, "");
    }

    #[test]
    fn test_realm_delete_request_maps_fields() {
        let realm = Realm::new("my-project", "us-east1", "r").with_time_zone("UTC");
        let request = realm_delete_request(&realm, "creds.json");
        let resource = request.resource.expect("resource set");
        assert_eq!(resource.time_zone.as_deref(), Some("UTC"));
        assert_eq!(request.service_account_file, "creds.json");
    }
}
