use crate::{
    config::ConfigManager,
    types::{MiningStats, PoolInfo, Timespan},
};
use dashmap::DashMap;
use tokio::{sync::RwLock, time::Instant};
use tracing::debug;

/// Short-lived memo of derived stats, keyed by interval, plus the
/// interval-independent pool identity list. Entries age out lazily; nothing
/// runs in the background.
#[derive(Default)]
pub(crate) struct StatsCache {
    entries: DashMap<Timespan, CacheEntry>,
    pools: RwLock<Vec<PoolInfo>>,
    config_manager: ConfigManager,
}

struct CacheEntry {
    last_updated: Instant,
    data: MiningStats,
}

impl StatsCache {
    pub(crate) fn new(config_manager: ConfigManager) -> Self {
        StatsCache {
            entries: DashMap::new(),
            pools: RwLock::new(Vec::new()),
            config_manager,
        }
    }

    /// A stale entry behaves exactly like a missing one and is dropped on
    /// observation.
    pub(crate) fn get(&self, interval: Timespan) -> Option<MiningStats> {
        let mut expired = false;

        let hit = match self.entries.get(&interval) {
            Some(entry) => {
                if entry.last_updated.elapsed() < self.config_manager.cache_ttl() {
                    Some(entry.data.clone())
                } else {
                    expired = true;
                    None
                }
            }
            None => None,
        };

        if expired {
            self.entries.remove(&interval);
            debug!(interval = %interval, "Stats cache entry expired");
        }

        hit
    }

    pub(crate) fn put(&self, interval: Timespan, data: MiningStats) {
        self.entries.insert(
            interval,
            CacheEntry {
                last_updated: Instant::now(),
                data,
            },
        );
    }

    pub(crate) async fn pools(&self) -> Vec<PoolInfo> {
        self.pools.read().await.clone()
    }

    pub(crate) async fn set_pools(&self, pools: Vec<PoolInfo>) {
        *self.pools.write().await = pools;
    }

    /// Wholesale invalidation: every interval key and the pool list. Stats
    /// for one network must never leak into the view for another.
    pub(crate) async fn clear(&self) {
        self.entries.clear();
        self.pools.write().await.clear();
    }
}
