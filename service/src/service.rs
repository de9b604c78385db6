use crate::{
    builder::MiningStatsServiceBuilder,
    cache::StatsCache,
    deriver::derive_mining_stats,
    traits::{PoolsDataSource, PreferenceStore},
    types::{MiningStats, MiningUnits, Network, PoolInfo, Timespan},
};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Preference-store key holding the user's default stats window token.
pub const MINING_WINDOW_PREFERENCE: &str = "miningWindowPreference";

/// Orchestrates cache lookup, backend fetch, derivation and cache write for
/// mining-pool stats. Every operation resolves to a renderable value; backend
/// failures are absorbed here, never surfaced to the presentation layer.
///
/// Construct through [`MiningStatsService::builder`]; construction subscribes
/// to the injected network channel and dropping the service (or calling
/// [`shutdown`](Self::shutdown)) ends that subscription.
pub struct MiningStatsService<D, P> {
    pub(crate) data_source: D,
    pub(crate) preferences: P,
    pub(crate) network: watch::Receiver<Network>,
    pub(crate) cache: Arc<StatsCache>,
    pub(crate) watcher_token: CancellationToken,
}

impl<D, P> MiningStatsService<D, P>
where
    D: PoolsDataSource,
    P: PreferenceStore,
{
    pub fn builder(
        data_source: D,
        preferences: P,
        network: watch::Receiver<Network>,
    ) -> MiningStatsServiceBuilder<D, P> {
        MiningStatsServiceBuilder::new(data_source, preferences, network)
    }

    /// Derived stats for one interval. Fresh cache entries are returned
    /// without touching the network; a failed fetch yields empty stats and
    /// leaves the cache unpopulated so the next call retries.
    pub async fn mining_stats(&self, interval: Timespan) -> MiningStats {
        let units = self.mining_units();

        if let Some(stats) = self.cache.get(interval) {
            debug!(interval = %interval, "Mining stats cache hit");
            return stats;
        }

        match self.data_source.list_pools(Some(interval)).await {
            Ok(response) => {
                let stats =
                    derive_mining_stats(response.payload, response.pool_count.as_deref(), units);
                self.cache.put(interval, stats.clone());

                stats
            }
            Err(e) => {
                warn!(interval = %interval, cause = %e, "Stats fetch failed, serving empty stats");
                MiningStats::empty(units)
            }
        }
    }

    /// The full pool identity list, fetched once and reused until a network
    /// change clears it. A failed fetch returns an empty list and caches
    /// nothing.
    pub async fn pools(&self) -> Vec<PoolInfo> {
        let cached = self.cache.pools().await;
        if !cached.is_empty() {
            return cached;
        }

        match self.data_source.list_pools(None).await {
            Ok(response) => {
                let pools: Vec<PoolInfo> =
                    response.payload.pools.iter().map(PoolInfo::from).collect();

                info!(pools = pools.len(), "Populated pool identity cache");
                self.cache.set_pools(pools.clone()).await;

                pools
            }
            Err(e) => {
                warn!(cause = %e, "Pool list fetch failed");
                Vec::new()
            }
        }
    }

    #[must_use]
    pub fn mining_units(&self) -> MiningUnits {
        MiningUnits::for_network(self.network())
    }

    #[must_use]
    pub fn network(&self) -> Network {
        *self.network.borrow()
    }

    /// The user's preferred stats window, floored at `min`. An absent
    /// preference defaults to one week; an unrecognized token ranks below
    /// everything and therefore also resolves to `min`.
    pub async fn default_timespan(&self, min: Timespan) -> Timespan {
        let preference = self
            .preferences
            .get_value(MINING_WINDOW_PREFERENCE)
            .await
            .unwrap_or_else(|| Timespan::default().to_string());

        match preference.parse::<Timespan>() {
            Ok(preferred) if preferred >= min => preferred,
            _ => min,
        }
    }

    /// Stops the network-change watcher. Also happens on drop.
    pub fn shutdown(&self) {
        self.watcher_token.cancel();
    }
}

impl<D, P> Drop for MiningStatsService<D, P> {
    fn drop(&mut self) {
        self.watcher_token.cancel();
    }
}
