mod addresses;
mod resolver;

pub use addresses::AddressResolutionError;
pub use addresses::RaftAddress;
pub use addresses::ServiceAddress;
pub use resolver::AddressResolver;

pub(crate) use addresses::split_host_port;
