mod address;
mod client;
mod connection;
mod policy;
#[cfg(test)]
mod test_utils;
mod grpc {
    include!("../generated/cluster.rs");
}

pub use address::AddressResolutionError;
pub use address::AddressResolver;
pub use address::RaftAddress;
pub use address::ServiceAddress;
pub use client::try_create_cluster_client;
pub use client::ClientError;
pub use client::ClusterClient;
pub use client::ClusterClientConfig;
pub use connection::ClusterConnection;
pub use connection::ConnectionError;
pub use connection::Connector;
pub use connection::GrpcConnection;
pub use connection::GrpcConnector;
pub use connection::LeaderConnectionCache;
pub use policy::ConfigurationError;
pub use policy::ConnectionPolicy;
pub use policy::ConnectionPolicyOptions;
pub use policy::OutcomeKind;

// Wire types, and the service trait for the node's server side.
pub use grpc::cluster_service_server::ClusterService;
pub use grpc::cluster_service_server::ClusterServiceServer;
pub use grpc::{
    ProtoApplyReply, ProtoApplyReq, ProtoJoinPeerReply, ProtoJoinPeerReq, ProtoNotifyPeerReply, ProtoNotifyPeerReq,
    ProtoQueryReply, ProtoQueryReq, ProtoRemovePeerReply, ProtoRemovePeerReq,
};
