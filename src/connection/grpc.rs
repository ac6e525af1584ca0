use crate::address::ServiceAddress;
use crate::connection::{ClusterConnection, ConnectionError, Connector};
use crate::grpc::cluster_service_client::ClusterServiceClient;
use crate::grpc::{
    ProtoApplyReply, ProtoApplyReq, ProtoJoinPeerReply, ProtoJoinPeerReq, ProtoNotifyPeerReply, ProtoNotifyPeerReq,
    ProtoQueryReply, ProtoQueryReq, ProtoRemovePeerReply, ProtoRemovePeerReq,
};
use crate::policy::{ConnectionPolicy, RealClock};
use std::future::Future;
use std::sync::{Arc, Mutex};
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Response, Status};

/// Opens plaintext gRPC channels to `ClusterService`.
pub struct GrpcConnector {
    logger: slog::Logger,
}

impl GrpcConnector {
    pub fn new(logger: slog::Logger) -> Self {
        GrpcConnector { logger }
    }
}

#[async_trait::async_trait]
impl Connector for GrpcConnector {
    type Connection = GrpcConnection;

    /// With a wait-for-ready policy the channel is created lazily: nothing is dialed here and each
    /// call waits for the connection to come up. Otherwise the channel is dialed eagerly and an
    /// unreachable node fails the connect.
    async fn connect(
        &self,
        address: &ServiceAddress,
        policy: Option<Arc<ConnectionPolicy>>,
    ) -> Result<GrpcConnection, ConnectionError> {
        let uri = address.uri();
        let endpoint = Endpoint::from_shared(uri.clone()).map_err(|e| ConnectionError::InvalidEndpoint {
            uri,
            source: e.into(),
        })?;

        let wait_for_ready = policy.as_ref().map_or(false, |p| p.wait_for_ready());
        let connected = if wait_for_ready {
            endpoint.connect_lazy()
        } else {
            endpoint.connect().await
        };
        let channel = connected.map_err(|e| ConnectionError::ConnectFailure {
            address: address.clone(),
            source: e.into(),
        })?;

        let logger = self.logger.new(slog::o!("Node" => address.to_string()));
        slog::debug!(logger, "Opened channel (wait for ready: {})", wait_for_ready);

        Ok(GrpcConnection {
            logger,
            client: Arc::new(Mutex::new(ClusterServiceClient::new(channel))),
            policy,
        })
    }
}

#[derive(Clone)]
pub struct GrpcConnection {
    logger: slog::Logger,
    // Only ever locked to clone the client; clones share the channel.
    client: Arc<Mutex<ClusterServiceClient<Channel>>>,
    policy: Option<Arc<ConnectionPolicy>>,
}

impl GrpcConnection {
    fn client(&self) -> ClusterServiceClient<Channel> {
        self.client.lock().expect("GrpcConnection.client() mutex guard poison").clone()
    }

    async fn call_with_policy<T, F, Fut>(&self, method: &'static str, call: F) -> Result<T, Status>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Status>>,
    {
        match &self.policy {
            Some(policy) if policy.wait_for_ready() => {
                let mut clock = RealClock;
                let mut call = call;
                let call = || {
                    let attempt = call();
                    async move { attempt.await.map_err(not_ready_as_unavailable) }
                };
                policy.retry(&mut clock, &self.logger, method, call).await
            }
            Some(policy) => {
                let mut clock = RealClock;
                policy.retry(&mut clock, &self.logger, method, call).await
            }
            None => {
                let mut call = call;
                call().await
            }
        }
    }
}

/// A lazy channel reports a node it cannot reach yet as an `Unknown` transport error. For a
/// wait-for-ready call that only means the channel is not ready, so it is retried as `Unavailable`.
fn not_ready_as_unavailable(status: Status) -> Status {
    if status.code() == Code::Unknown && status.message().starts_with("transport error") {
        Status::new(Code::Unavailable, status.message())
    } else {
        status
    }
}

#[async_trait::async_trait]
impl ClusterConnection for GrpcConnection {
    async fn join_peer(&self, request: ProtoJoinPeerReq) -> Result<ProtoJoinPeerReply, Status> {
        slog::debug!(self.logger, "ClientWire - {:?}", request);
        let mut client = self.client();
        client.join_peer(request).await.map(Response::into_inner)
    }

    async fn notify_peer(&self, request: ProtoNotifyPeerReq) -> Result<ProtoNotifyPeerReply, Status> {
        slog::debug!(self.logger, "ClientWire - {:?}", request);
        let mut client = self.client();
        client.notify_peer(request).await.map(Response::into_inner)
    }

    async fn remove_peer(&self, request: ProtoRemovePeerReq) -> Result<ProtoRemovePeerReply, Status> {
        slog::debug!(self.logger, "ClientWire - {:?}", request);
        let mut client = self.client();
        client.remove_peer(request).await.map(Response::into_inner)
    }

    async fn apply(&self, request: ProtoApplyReq) -> Result<ProtoApplyReply, Status> {
        slog::debug!(self.logger, "ClientWire - {:?}", request);
        self.call_with_policy("Apply", || {
            let mut client = self.client();
            let request = request.clone();
            async move { client.apply(request).await.map(Response::into_inner) }
        })
        .await
    }

    async fn query(&self, request: ProtoQueryReq) -> Result<ProtoQueryReply, Status> {
        slog::debug!(self.logger, "ClientWire - {:?}", request);
        self.call_with_policy("Query", || {
            let mut client = self.client();
            let request = request.clone();
            async move { client.query(request).await.map(Response::into_inner) }
        })
        .await
    }

    fn close(self) {
        // The channel's background connection task exits once its last handle is dropped.
        slog::debug!(self.logger, "Closing channel");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_become_unavailable() {
        let refused = Status::new(
            Code::Unknown,
            "transport error: error trying to connect: tcp connect error: Connection refused (os error 111)",
        );
        let status = not_ready_as_unavailable(refused);
        assert_eq!(status.code(), Code::Unavailable);
        assert!(status.message().contains("Connection refused"));
    }

    #[test]
    fn other_statuses_are_untouched() {
        let unknown = not_ready_as_unavailable(Status::new(Code::Unknown, "handler panicked"));
        assert_eq!(unknown.code(), Code::Unknown);

        let invalid = not_ready_as_unavailable(Status::new(Code::InvalidArgument, "transport error"));
        assert_eq!(invalid.code(), Code::InvalidArgument);
    }
}
