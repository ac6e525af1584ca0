use crate::address::{AddressResolutionError, AddressResolver, RaftAddress};
use crate::connection::{
    ClusterConnection, ConnectionError, Connector, GrpcConnector, LeaderConnectionCache, ScopedConnection,
};
use crate::grpc::{
    ProtoApplyReply, ProtoApplyReq, ProtoJoinPeerReply, ProtoJoinPeerReq, ProtoNotifyPeerReply, ProtoNotifyPeerReq,
    ProtoQueryReply, ProtoQueryReq, ProtoRemovePeerReply, ProtoRemovePeerReq,
};
use crate::policy::ConnectionPolicy;
use std::sync::Arc;
use tokio::task::JoinError;
use tonic::Status;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("resolve address: {0}")]
    ResolveAddress(#[from] AddressResolutionError),
    #[error("dial: {0}")]
    Dial(#[from] ConnectionError),
    /// Returned by the remote node, after any retries the connection policy allowed.
    #[error(transparent)]
    Remote(#[from] Status),
    #[error("apply task did not complete: {0}")]
    ApplyTask(#[from] JoinError),
}

/// Talks to other nodes of the cluster: membership changes (join, notify, remove) and
/// data-plane calls (apply, query).
///
/// Calls addressed to the leader share one cached connection, replaced whenever the caller names a
/// different leader. Redirects are not followed here: when the leader moves, the caller retries
/// with the new leader's address.
///
/// Every call except `apply` stops when its future is dropped, so callers bound them with
/// `tokio::time::timeout` or by racing against their own shutdown signal.
pub struct ClusterClient<C: Connector = GrpcConnector> {
    logger: slog::Logger,
    resolver: AddressResolver,
    connector: Arc<C>,
    leader: LeaderConnectionCache<C>,
}

impl<C: Connector> ClusterClient<C> {
    pub fn new(logger: slog::Logger, resolver: AddressResolver, policy: ConnectionPolicy, connector: C) -> Self {
        let connector = Arc::new(connector);
        let leader = LeaderConnectionCache::new(logger.clone(), resolver, connector.clone(), Arc::new(policy));

        ClusterClient {
            logger,
            resolver,
            connector,
            leader,
        }
    }

    /// Asks the leader to add this node to the cluster.
    pub async fn join(&self, leader: &RaftAddress, request: ProtoJoinPeerReq) -> Result<ProtoJoinPeerReply, ClientError> {
        let connection = self.leader.get_or_create(leader).await?;
        Ok(connection.join_peer(request).await?)
    }

    /// Tells `peer`, which need not be the leader, that this node is ready to join. Uses a
    /// short-lived connection of its own so the leader connection is left alone.
    pub async fn notify(&self, peer: &RaftAddress, request: ProtoNotifyPeerReq) -> Result<ProtoNotifyPeerReply, ClientError> {
        let service_address = self.resolver.resolve(peer)?;
        slog::debug!(self.logger, "Notifying peer {} at {}", peer, service_address);

        let connection = ScopedConnection::new(self.connector.connect(&service_address, None).await?);
        Ok(connection.notify_peer(request).await?)
    }

    /// Asks the leader to remove a node from the cluster.
    pub async fn remove(
        &self,
        leader: &RaftAddress,
        request: ProtoRemovePeerReq,
    ) -> Result<ProtoRemovePeerReply, ClientError> {
        let connection = self.leader.get_or_create(leader).await?;
        Ok(connection.remove_peer(request).await?)
    }

    /// Submits a command to the leader's log.
    ///
    /// The remote call runs on its own task: dropping the returned future stops the wait, not the
    /// call. A command that reached the leader is always seen through to a reply, bounded by the
    /// connection policy's attempts and backoff.
    pub async fn apply(&self, leader: &RaftAddress, request: ProtoApplyReq) -> Result<ProtoApplyReply, ClientError> {
        let connection = self.leader.get_or_create(leader).await?;
        let call = tokio::spawn(async move { connection.apply(request).await });
        Ok(call.await??)
    }

    /// Runs a read query on the leader.
    pub async fn query(&self, leader: &RaftAddress, request: ProtoQueryReq) -> Result<ProtoQueryReply, ClientError> {
        let connection = self.leader.get_or_create(leader).await?;
        Ok(connection.query(request).await?)
    }

    /// Closes the leader connection. The client stays usable and reconnects on the next call.
    pub async fn close(&self) {
        self.leader.close().await;
    }
}
