use crate::address::AddressResolver;
use crate::client::ClusterClient;
use crate::connection::GrpcConnector;
use crate::policy::{ConfigurationError, ConnectionPolicy, ConnectionPolicyOptions};
use std::convert::TryFrom;

pub struct ClusterClientConfig {
    // Nodes share one host and serve RPC on their Raft port + 1. Otherwise all nodes serve RPC on
    // `rpc_port`.
    pub local_cluster: bool,
    pub rpc_port: u16,
    pub connection_policy: ConnectionPolicyOptions,
    pub info_logger: slog::Logger,
}

pub fn try_create_cluster_client(config: ClusterClientConfig) -> Result<ClusterClient, ConfigurationError> {
    let root_logger = config.info_logger;

    let resolver = AddressResolver::new(config.local_cluster, config.rpc_port)?;
    let policy = ConnectionPolicy::try_from(config.connection_policy)?;
    slog::info!(root_logger, "Creating cluster client. Resolver: {:?}, policy: {:?}", resolver, policy);

    let connector = GrpcConnector::new(root_logger.clone());

    Ok(ClusterClient::new(root_logger, resolver, policy, connector))
}
