use crate::address::ServiceAddress;
use crate::grpc::{
    ProtoApplyReply, ProtoApplyReq, ProtoJoinPeerReply, ProtoJoinPeerReq, ProtoNotifyPeerReply, ProtoNotifyPeerReq,
    ProtoQueryReply, ProtoQueryReq, ProtoRemovePeerReply, ProtoRemovePeerReq,
};
use crate::policy::ConnectionPolicy;
use std::error::Error;
use std::sync::Arc;
use tonic::Status;

/// Establishes connections to cluster nodes' RPC services.
#[async_trait::async_trait]
pub trait Connector: Send + Sync + 'static {
    type Connection: ClusterConnection;

    /// Opens a connection to `address`. When `policy` is present it governs the data-plane calls
    /// (`apply`, `query`) made over the returned connection.
    async fn connect(
        &self,
        address: &ServiceAddress,
        policy: Option<Arc<ConnectionPolicy>>,
    ) -> Result<Self::Connection, ConnectionError>;
}

/// A live connection to one node's `ClusterService`. Clones share the underlying channel and may
/// be used for concurrent calls.
#[async_trait::async_trait]
pub trait ClusterConnection: Clone + Send + Sync + 'static {
    async fn join_peer(&self, request: ProtoJoinPeerReq) -> Result<ProtoJoinPeerReply, Status>;

    async fn notify_peer(&self, request: ProtoNotifyPeerReq) -> Result<ProtoNotifyPeerReply, Status>;

    async fn remove_peer(&self, request: ProtoRemovePeerReq) -> Result<ProtoRemovePeerReply, Status>;

    async fn apply(&self, request: ProtoApplyReq) -> Result<ProtoApplyReply, Status>;

    async fn query(&self, request: ProtoQueryReq) -> Result<ProtoQueryReply, Status>;

    /// Releases this handle. Calls already in flight on other clones are allowed to finish.
    fn close(self);
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("invalid endpoint '{uri}': {source}")]
    InvalidEndpoint {
        uri: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    #[error("failed to connect to {address}: {source}")]
    ConnectFailure {
        address: ServiceAddress,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}
