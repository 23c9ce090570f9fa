//! Tenant resolution with session caching and single-flight de-duplication.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::directory::{DirectoryError, TenantDirectory};
use crate::domain::tenant::TenantRecord;
use crate::utils::host::normalize_hostname;

type Flight = Shared<BoxFuture<'static, Result<Arc<TenantRecord>, DirectoryError>>>;

enum Slot {
    /// A settled, session-cached record.
    Ready(Arc<TenantRecord>),
    /// A lookup in progress; concurrent callers await the same future.
    /// The id distinguishes this flight from any later one for the same
    /// key when the settled result is written back.
    InFlight { id: u64, flight: Flight },
}

/// Resolves hostnames to tenant records through a [`TenantDirectory`].
///
/// # Caching
///
/// Successful lookups are cached for the lifetime of the process (no TTL;
/// a restart re-resolves). Failures are never cached, so a retry reaches
/// the directory again.
///
/// # Single-flight
///
/// At most one directory request is in flight per hostname. A second
/// caller arriving while a lookup runs awaits the same shared future
/// instead of issuing a duplicate request.
///
/// # Staleness
///
/// The cache is keyed by hostname, so a late-settling lookup for one
/// hostname can never overwrite another's entry. A generation counter
/// guards [`invalidate_all`](Self::invalidate_all): results from a flight
/// started before an invalidation are returned to their callers but not
/// written back into the fresh cache.
pub struct TenantResolver {
    directory: Arc<dyn TenantDirectory>,
    slots: Mutex<HashMap<String, Slot>>,
    epoch: AtomicU64,
    flight_seq: AtomicU64,
}

impl TenantResolver {
    pub fn new(directory: Arc<dyn TenantDirectory>) -> Self {
        Self {
            directory,
            slots: Mutex::new(HashMap::new()),
            epoch: AtomicU64::new(0),
            flight_seq: AtomicU64::new(0),
        }
    }

    /// Resolves `hostname` to its tenant record.
    ///
    /// # Errors
    ///
    /// Propagates [`DirectoryError`] from the directory; see
    /// [`TenantDirectory::fetch_by_domain`].
    pub async fn resolve(&self, hostname: &str) -> Result<Arc<TenantRecord>, DirectoryError> {
        let key = normalize_hostname(hostname);
        let epoch = self.epoch.load(Ordering::SeqCst);

        let (flight_id, flight) = {
            let mut slots = self.slots.lock().await;
            match slots.get(&key) {
                Some(Slot::Ready(record)) => {
                    debug!("tenant cache HIT for {}", key);
                    return Ok(record.clone());
                }
                Some(Slot::InFlight { id, flight }) => {
                    debug!("tenant lookup JOIN for {}", key);
                    (*id, flight.clone())
                }
                None => {
                    debug!("tenant cache MISS for {}", key);
                    metrics::counter!("tenant_directory_lookups_total").increment(1);
                    let id = self.flight_seq.fetch_add(1, Ordering::SeqCst);
                    let directory = self.directory.clone();
                    let lookup_key = key.clone();
                    let flight: Flight = async move {
                        directory.fetch_by_domain(&lookup_key).await.map(Arc::new)
                    }
                    .boxed()
                    .shared();
                    slots.insert(
                        key.clone(),
                        Slot::InFlight {
                            id,
                            flight: flight.clone(),
                        },
                    );
                    (id, flight)
                }
            }
        };

        let result = flight.await;

        let mut slots = self.slots.lock().await;
        // Apply only if this flight is still the current one for the key
        // and no invalidation happened while it ran. A superseded result
        // is still returned to its caller, just never cached.
        let current = matches!(slots.get(&key), Some(Slot::InFlight { id, .. }) if *id == flight_id);
        if current && self.epoch.load(Ordering::SeqCst) == epoch {
            match &result {
                Ok(record) => {
                    slots.insert(key, Slot::Ready(record.clone()));
                }
                Err(_) => {
                    slots.remove(&key);
                }
            }
        }

        result
    }

    /// Drops every cached record and detaches in-flight lookups.
    ///
    /// Lookups already running settle normally for their callers, but
    /// their results are discarded instead of entering the new session
    /// generation.
    pub async fn invalidate_all(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.slots.lock().await.clear();
    }

    /// Number of hostnames with a settled, cached record.
    pub async fn cached_hosts(&self) -> usize {
        self.slots
            .lock()
            .await
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::watch;

    fn record(id: &str, template_id: i64) -> TenantRecord {
        serde_json::from_value(json!({ "id": id, "template_id": template_id })).unwrap()
    }

    /// Directory whose lookups block until the gate opens, counting calls.
    struct GatedDirectory {
        calls: AtomicUsize,
        gate: watch::Receiver<bool>,
    }

    impl GatedDirectory {
        fn new() -> (Arc<Self>, watch::Sender<bool>) {
            let (tx, rx) = watch::channel(false);
            (
                Arc::new(Self {
                    calls: AtomicUsize::new(0),
                    gate: rx,
                }),
                tx,
            )
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TenantDirectory for GatedDirectory {
        async fn fetch_by_domain(&self, hostname: &str) -> Result<TenantRecord, DirectoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut gate = self.gate.clone();
            while !*gate.borrow() {
                gate.changed().await.unwrap();
            }
            match hostname {
                "ghost.igrowbig.com" => Err(DirectoryError::NotConfigured),
                "down.igrowbig.com" => Err(DirectoryError::Network("connect refused".into())),
                _ => Ok(record(&format!("t-{}", hostname), 2)),
            }
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_concurrent_resolves_share_one_request() {
        let (directory, gate) = GatedDirectory::new();
        let resolver = Arc::new(TenantResolver::new(directory.clone()));

        let r1 = resolver.clone();
        let r2 = resolver.clone();
        let h1 = tokio::spawn(async move { r1.resolve("acme.igrowbig.com").await });
        let h2 = tokio::spawn(async move { r2.resolve("acme.igrowbig.com").await });

        // Let both callers reach the in-flight future before opening the gate.
        tokio::task::yield_now().await;
        gate.send(true).unwrap();

        let a = h1.await.unwrap().unwrap();
        let b = h2.await.unwrap().unwrap();

        assert_eq!(directory.calls(), 1);
        assert_eq!(a.id, "t-acme.igrowbig.com");
        assert_eq!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_success_is_cached_for_the_session() {
        let (directory, gate) = GatedDirectory::new();
        gate.send(true).unwrap();
        let resolver = TenantResolver::new(directory.clone());

        resolver.resolve("acme.igrowbig.com").await.unwrap();
        resolver.resolve("acme.igrowbig.com").await.unwrap();
        resolver.resolve("ACME.igrowbig.com:443").await.unwrap();

        assert_eq!(directory.calls(), 1);
        assert_eq!(resolver.cached_hosts().await, 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (directory, gate) = GatedDirectory::new();
        gate.send(true).unwrap();
        let resolver = TenantResolver::new(directory.clone());

        let first = resolver.resolve("down.igrowbig.com").await;
        assert!(matches!(first, Err(DirectoryError::Network(_))));

        let second = resolver.resolve("down.igrowbig.com").await;
        assert!(matches!(second, Err(DirectoryError::Network(_))));

        // Each attempt reached the directory.
        assert_eq!(directory.calls(), 2);
        assert_eq!(resolver.cached_hosts().await, 0);
    }

    #[tokio::test]
    async fn test_not_configured_is_distinguishable() {
        let (directory, gate) = GatedDirectory::new();
        gate.send(true).unwrap();
        let resolver = TenantResolver::new(directory);

        let result = resolver.resolve("ghost.igrowbig.com").await;
        assert_eq!(result.unwrap_err(), DirectoryError::NotConfigured);
    }

    #[tokio::test]
    async fn test_hosts_resolve_independently() {
        let (directory, gate) = GatedDirectory::new();
        let resolver = Arc::new(TenantResolver::new(directory.clone()));

        // Start a lookup for A that stays in flight.
        let slow = resolver.clone();
        let handle = tokio::spawn(async move { slow.resolve("acme.igrowbig.com").await });
        tokio::task::yield_now().await;

        gate.send(true).unwrap();

        // B resolves while A's flight settles; neither clobbers the other.
        let b = resolver.resolve("bravo.igrowbig.com").await.unwrap();
        let a = handle.await.unwrap().unwrap();

        assert_eq!(a.id, "t-acme.igrowbig.com");
        assert_eq!(b.id, "t-bravo.igrowbig.com");
        assert_eq!(resolver.cached_hosts().await, 2);

        // Cached entries stay intact per host.
        let b_again = resolver.resolve("bravo.igrowbig.com").await.unwrap();
        assert_eq!(b_again.id, "t-bravo.igrowbig.com");
        assert_eq!(directory.calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidation_discards_in_flight_result() {
        let (directory, gate) = GatedDirectory::new();
        let resolver = Arc::new(TenantResolver::new(directory.clone()));

        let slow = resolver.clone();
        let handle = tokio::spawn(async move { slow.resolve("acme.igrowbig.com").await });
        tokio::task::yield_now().await;

        // Invalidate while the lookup is still in flight.
        resolver.invalidate_all().await;
        gate.send(true).unwrap();

        // The original caller still gets its result.
        let stale = handle.await.unwrap().unwrap();
        assert_eq!(stale.id, "t-acme.igrowbig.com");

        // But the stale result was not written into the new generation.
        assert_eq!(resolver.cached_hosts().await, 0);

        resolver.resolve("acme.igrowbig.com").await.unwrap();
        assert_eq!(directory.calls(), 2);
    }
}
