use crate::address::{split_host_port, AddressResolutionError, RaftAddress, ServiceAddress};
use crate::policy::ConfigurationError;

/// Offset applied to the Raft port when several nodes share one host.
const LOCAL_CLUSTER_PORT_OFFSET: u16 = 1;

/// Translates the address a node uses for Raft into the address its cluster RPC service listens
/// on.
///
/// * `FixedPort` - every node serves RPC on the same port, whatever its Raft port is. This is the
///   normal deployment where each node has its own host.
/// * `Offset` - nodes share a host and are told apart by Raft port only, so the RPC port is the
///   Raft port plus a fixed delta.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AddressResolver {
    FixedPort(u16),
    Offset(u16),
}

impl AddressResolver {
    /// `local_cluster` selects offset mode (Raft port + 1). Otherwise every node is expected to
    /// listen on `rpc_port`.
    pub fn new(local_cluster: bool, rpc_port: u16) -> Result<Self, ConfigurationError> {
        if local_cluster {
            return Ok(AddressResolver::Offset(LOCAL_CLUSTER_PORT_OFFSET));
        }
        if rpc_port == 0 {
            return Err(ConfigurationError::IllegalServicePort(rpc_port));
        }

        Ok(AddressResolver::FixedPort(rpc_port))
    }

    pub fn resolve(&self, raft_address: &RaftAddress) -> Result<ServiceAddress, AddressResolutionError> {
        let address = raft_address.as_str();
        let (host, port) = split_host_port(address)?;

        match *self {
            AddressResolver::FixedPort(rpc_port) => Ok(ServiceAddress::new(host, rpc_port)),
            AddressResolver::Offset(offset) => {
                let raft_port: u16 = port.parse().map_err(|_| AddressResolutionError::NonNumericPort {
                    address: address.to_string(),
                    port: port.to_string(),
                })?;
                let rpc_port = raft_port
                    .checked_add(offset)
                    .ok_or_else(|| AddressResolutionError::PortOutOfRange {
                        address: address.to_string(),
                        port: raft_port,
                        offset,
                    })?;

                Ok(ServiceAddress::new(host, rpc_port))
            }
        }
    }
}
