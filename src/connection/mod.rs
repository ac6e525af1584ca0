mod cache;
mod connector;
mod grpc;
mod scoped;

pub use cache::LeaderConnectionCache;
pub use connector::ClusterConnection;
pub use connector::ConnectionError;
pub use connector::Connector;
pub use grpc::GrpcConnection;
pub use grpc::GrpcConnector;

pub(crate) use scoped::ScopedConnection;
