use crate::address::{AddressResolver, RaftAddress};
use crate::client::ClientError;
use crate::connection::{ClusterConnection, Connector};
use crate::policy::ConnectionPolicy;
use std::sync::Arc;
use tokio::sync::Mutex;

enum CacheState<T> {
    Empty,
    Bound { address: RaftAddress, connection: T },
}

/// Holds at most one connection, to the node last used as leader. Switching leader closes the old
/// connection before dialing the new one.
///
/// One lock serializes every transition, dialing included, so concurrent callers for the same
/// leader share a single dial. Remote calls are made on the returned handle after the lock is
/// released.
pub struct LeaderConnectionCache<C: Connector> {
    logger: slog::Logger,
    resolver: AddressResolver,
    connector: Arc<C>,
    policy: Arc<ConnectionPolicy>,
    state: Mutex<CacheState<C::Connection>>,
}

impl<C: Connector> LeaderConnectionCache<C> {
    pub fn new(
        logger: slog::Logger,
        resolver: AddressResolver,
        connector: Arc<C>,
        policy: Arc<ConnectionPolicy>,
    ) -> Self {
        LeaderConnectionCache {
            logger,
            resolver,
            connector,
            policy,
            state: Mutex::new(CacheState::Empty),
        }
    }

    /// Returns a connection to `leader`, reusing the cached one when it is bound to the same
    /// address.
    pub async fn get_or_create(&self, leader: &RaftAddress) -> Result<C::Connection, ClientError> {
        let mut state = self.state.lock().await;

        if let CacheState::Bound { address, connection } = &*state {
            if address == leader {
                return Ok(connection.clone());
            }
        }

        // Resolve before tearing anything down, so a bad address can't cost us a good connection.
        let service_address = self.resolver.resolve(leader)?;

        if let CacheState::Bound { address, connection } = std::mem::replace(&mut *state, CacheState::Empty) {
            slog::info!(self.logger, "Leader changed from {} to {}. Closing old connection.", address, leader);
            connection.close();
        }

        let connection = self
            .connector
            .connect(&service_address, Some(self.policy.clone()))
            .await?;
        slog::info!(self.logger, "Connected to leader {} at {}", leader, service_address);

        *state = CacheState::Bound {
            address: leader.clone(),
            connection: connection.clone(),
        };

        Ok(connection)
    }

    /// Releases the cached connection, if any. The next `get_or_create()` dials again.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if let CacheState::Bound { address, connection } = std::mem::replace(&mut *state, CacheState::Empty) {
            slog::info!(self.logger, "Closing connection to leader {}", address);
            connection.close();
        }
    }

    pub async fn bound_address(&self) -> Option<RaftAddress> {
        match &*self.state.lock().await {
            CacheState::Empty => None,
            CacheState::Bound { address, .. } => Some(address.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressResolutionError;
    use crate::test_utils::{logger, FakeConnector};

    fn cache(connector: &FakeConnector) -> LeaderConnectionCache<FakeConnector> {
        LeaderConnectionCache::new(
            logger(),
            AddressResolver::Offset(1),
            Arc::new(connector.clone()),
            Arc::new(ConnectionPolicy::default()),
        )
    }

    #[tokio::test]
    async fn same_address_dials_once() {
        let connector = FakeConnector::default();
        let cache = cache(&connector);
        let leader = RaftAddress::from("10.0.0.5:7000");

        let first = cache.get_or_create(&leader).await.unwrap();
        let second = cache.get_or_create(&leader).await.unwrap();
        let third = cache.get_or_create(&leader).await.unwrap();

        assert_eq!(connector.dialed(), vec!["10.0.0.5:7001"]);
        assert_eq!(first.id(), second.id());
        assert_eq!(first.id(), third.id());
        assert!(connector.closed().is_empty());
        assert_eq!(cache.bound_address().await, Some(leader));
    }

    #[tokio::test]
    async fn cached_connection_carries_policy() {
        let connector = FakeConnector::default();
        let cache = cache(&connector);

        let connection = cache.get_or_create(&"10.0.0.5:7000".into()).await.unwrap();

        assert!(connection.has_policy());
    }

    #[tokio::test]
    async fn leader_change_closes_old_connection_once() {
        let connector = FakeConnector::default();
        let cache = cache(&connector);

        let a = cache.get_or_create(&"10.0.0.5:7000".into()).await.unwrap();
        let b = cache.get_or_create(&"10.0.0.6:7000".into()).await.unwrap();
        let b_again = cache.get_or_create(&"10.0.0.6:7000".into()).await.unwrap();

        assert_eq!(connector.dialed(), vec!["10.0.0.5:7001", "10.0.0.6:7001"]);
        assert_eq!(connector.closed(), vec![a.id()]);
        assert_ne!(a.id(), b.id());
        assert_eq!(b.id(), b_again.id());
        assert_eq!(cache.bound_address().await, Some("10.0.0.6:7000".into()));
    }

    #[tokio::test]
    async fn close_empty_cache_is_noop() {
        let connector = FakeConnector::default();
        let cache = cache(&connector);

        cache.close().await;
        cache.close().await;

        assert!(connector.closed().is_empty());
        assert!(connector.dialed().is_empty());
        assert_eq!(cache.bound_address().await, None);
    }

    #[tokio::test]
    async fn close_then_redial() {
        let connector = FakeConnector::default();
        let cache = cache(&connector);
        let leader = RaftAddress::from("10.0.0.5:7000");

        let before = cache.get_or_create(&leader).await.unwrap();
        cache.close().await;
        cache.close().await;
        assert_eq!(cache.bound_address().await, None);
        let after = cache.get_or_create(&leader).await.unwrap();

        assert_eq!(connector.closed(), vec![before.id()]);
        assert_eq!(connector.dialed(), vec!["10.0.0.5:7001", "10.0.0.5:7001"]);
        assert_ne!(before.id(), after.id());
    }

    #[tokio::test]
    async fn unresolvable_address_keeps_current_connection() {
        let connector = FakeConnector::default();
        let cache = cache(&connector);
        let leader = RaftAddress::from("10.0.0.5:7000");
        let connection = cache.get_or_create(&leader).await.unwrap();

        let result = cache.get_or_create(&"not-an-address".into()).await;

        match result {
            Err(ClientError::ResolveAddress(AddressResolutionError::MissingPort(_))) => {}
            Err(e) => panic!("Unexpected error: {:?}", e),
            Ok(_) => panic!("Expected resolution failure"),
        }
        assert!(connector.closed().is_empty());
        assert_eq!(cache.bound_address().await, Some(leader.clone()));
        assert_eq!(cache.get_or_create(&leader).await.unwrap().id(), connection.id());
    }

    #[tokio::test]
    async fn failed_dial_leaves_cache_empty() {
        let connector = FakeConnector::default();
        let cache = cache(&connector);
        let old = cache.get_or_create(&"10.0.0.5:7000".into()).await.unwrap();

        connector.refuse_dials(true);
        let result = cache.get_or_create(&"10.0.0.6:7000".into()).await;

        assert!(matches!(result, Err(ClientError::Dial(_))));
        assert_eq!(connector.closed(), vec![old.id()]);
        assert_eq!(cache.bound_address().await, None);

        connector.refuse_dials(false);
        cache.get_or_create(&"10.0.0.6:7000".into()).await.unwrap();
        assert_eq!(
            connector.dialed(),
            vec!["10.0.0.5:7001", "10.0.0.6:7001", "10.0.0.6:7001"]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_share_one_dial() {
        let connector = FakeConnector::default();
        let cache = Arc::new(cache(&connector));
        let leader = RaftAddress::from("10.0.0.5:7000");

        let mut tasks = Vec::new();
        for _ in 0..32 {
            let cache = cache.clone();
            let leader = leader.clone();
            tasks.push(tokio::spawn(async move {
                cache.get_or_create(&leader).await.unwrap().id()
            }));
        }

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }

        assert_eq!(connector.dialed().len(), 1);
        assert!(ids.iter().all(|id| *id == ids[0]));
        assert!(connector.closed().is_empty());
    }
}
