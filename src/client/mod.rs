//! This mod holds the client-facing API: the cluster client and how to create one.
mod client;
mod wiring;

pub use client::ClientError;
pub use client::ClusterClient;
pub use wiring::try_create_cluster_client;
pub use wiring::ClusterClientConfig;
