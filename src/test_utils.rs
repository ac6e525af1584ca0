//! In-memory `Connector` that records what the client does with its connections.
use crate::address::ServiceAddress;
use crate::connection::{ClusterConnection, ConnectionError, Connector};
use crate::grpc::{
    ProtoApplyReply, ProtoApplyReq, ProtoJoinPeerReply, ProtoJoinPeerReq, ProtoNotifyPeerReply, ProtoNotifyPeerReq,
    ProtoQueryReply, ProtoQueryReq, ProtoRemovePeerReply, ProtoRemovePeerReq,
};
use crate::policy::ConnectionPolicy;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tokio::time::Duration;
use tonic::{Code, Status};

pub(crate) fn logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}

#[derive(Default)]
struct FakeState {
    next_id: u64,
    dialed: Vec<String>,
    dialed_with_policy: Vec<bool>,
    closed: Vec<u64>,
    /// (connection id, method)
    calls: Vec<(u64, &'static str)>,
    refuse_dials: bool,
    remote_failure: Option<Code>,
    hold_applies: bool,
}

#[derive(Clone, Default)]
pub(crate) struct FakeConnector {
    state: Arc<Mutex<FakeState>>,
    apply_gate: Arc<Notify>,
}

impl FakeConnector {
    fn with_state<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.state.lock().expect("FakeConnector mutex guard poison"))
    }

    /// Service addresses in dial order.
    pub(crate) fn dialed(&self) -> Vec<String> {
        self.with_state(|s| s.dialed.clone())
    }

    pub(crate) fn dialed_with_policy(&self) -> Vec<bool> {
        self.with_state(|s| s.dialed_with_policy.clone())
    }

    /// Connection ids in close order.
    pub(crate) fn closed(&self) -> Vec<u64> {
        self.with_state(|s| s.closed.clone())
    }

    pub(crate) fn calls(&self) -> Vec<(u64, &'static str)> {
        self.with_state(|s| s.calls.clone())
    }

    pub(crate) fn refuse_dials(&self, refuse: bool) {
        self.with_state(|s| s.refuse_dials = refuse);
    }

    /// Every remote call fails with `code` until reset with `None`.
    pub(crate) fn fail_remote_calls(&self, code: Option<Code>) {
        self.with_state(|s| s.remote_failure = code);
    }

    /// Applies block until `release_apply()` is called.
    pub(crate) fn hold_applies(&self) {
        self.with_state(|s| s.hold_applies = true);
    }

    pub(crate) fn release_apply(&self) {
        self.apply_gate.notify_one();
    }

    async fn record_call(&self, id: u64, method: &'static str) -> Result<(), Status> {
        let (failure, hold) = self.with_state(|s| (s.remote_failure, s.hold_applies));
        if method == "Apply" && hold {
            self.apply_gate.notified().await;
        }

        self.with_state(|s| s.calls.push((id, method)));
        match failure {
            Some(code) => Err(Status::new(code, "fake remote failure")),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Connector for FakeConnector {
    type Connection = FakeConnection;

    async fn connect(
        &self,
        address: &ServiceAddress,
        policy: Option<Arc<ConnectionPolicy>>,
    ) -> Result<FakeConnection, ConnectionError> {
        // Give concurrent callers a chance to pile up behind the cache lock.
        tokio::time::sleep(Duration::from_millis(5)).await;

        let id = self.with_state(|s| {
            s.dialed.push(address.to_string());
            s.dialed_with_policy.push(policy.is_some());
            if s.refuse_dials {
                return None;
            }
            s.next_id += 1;
            Some(s.next_id)
        });

        match id {
            Some(id) => Ok(FakeConnection {
                id,
                connector: self.clone(),
                has_policy: policy.is_some(),
            }),
            None => Err(ConnectionError::ConnectFailure {
                address: address.clone(),
                source: "connection refused".into(),
            }),
        }
    }
}

#[derive(Clone)]
pub(crate) struct FakeConnection {
    id: u64,
    connector: FakeConnector,
    has_policy: bool,
}

impl FakeConnection {
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn has_policy(&self) -> bool {
        self.has_policy
    }
}

#[async_trait::async_trait]
impl ClusterConnection for FakeConnection {
    async fn join_peer(&self, request: ProtoJoinPeerReq) -> Result<ProtoJoinPeerReply, Status> {
        self.connector.record_call(self.id, "JoinPeer").await?;
        Ok(ProtoJoinPeerReply {
            leader: request.address,
        })
    }

    async fn notify_peer(&self, _request: ProtoNotifyPeerReq) -> Result<ProtoNotifyPeerReply, Status> {
        self.connector.record_call(self.id, "NotifyPeer").await?;
        Ok(ProtoNotifyPeerReply {})
    }

    async fn remove_peer(&self, request: ProtoRemovePeerReq) -> Result<ProtoRemovePeerReply, Status> {
        self.connector.record_call(self.id, "RemovePeer").await?;
        Ok(ProtoRemovePeerReply {
            leader: request.node_id,
        })
    }

    async fn apply(&self, request: ProtoApplyReq) -> Result<ProtoApplyReply, Status> {
        self.connector.record_call(self.id, "Apply").await?;
        Ok(ProtoApplyReply {
            version: request.version + 1,
            leader: String::new(),
        })
    }

    async fn query(&self, request: ProtoQueryReq) -> Result<ProtoQueryReply, Status> {
        self.connector.record_call(self.id, "Query").await?;
        Ok(ProtoQueryReply {
            payload: request.sub_command,
        })
    }

    fn close(self) {
        let id = self.id;
        self.connector.with_state(|s| s.closed.push(id));
    }
}
