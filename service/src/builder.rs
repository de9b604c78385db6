use crate::{
    cache::StatsCache,
    config::{CacheConfig, Config, ConfigManager},
    service::MiningStatsService,
    traits::{PoolsDataSource, PreferenceStore},
    types::Network,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct MiningStatsServiceBuilder<D, P> {
    pub data_source: D,
    pub preferences: P,
    pub network: watch::Receiver<Network>,
    pub cache_config: CacheConfig,
    pub cancel_token: Option<CancellationToken>,
}

impl<D, P> MiningStatsServiceBuilder<D, P>
where
    D: PoolsDataSource,
    P: PreferenceStore,
{
    pub fn new(data_source: D, preferences: P, network: watch::Receiver<Network>) -> Self {
        Self {
            data_source,
            preferences,
            network,
            cache_config: CacheConfig::default(),
            cancel_token: None,
        }
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_config.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Wires the cache and spawns the network-change watcher, so this must
    /// run inside a tokio runtime.
    pub fn build(self) -> MiningStatsService<D, P> {
        let config_manager = ConfigManager::new(Config {
            cache: self.cache_config,
        });

        let cache = Arc::new(StatsCache::new(config_manager));

        let cancel_token = if let Some(cancel_token) = self.cancel_token {
            cancel_token
        } else {
            CancellationToken::new()
        };

        //Child token: dropping the service stops the watcher without
        //cancelling a caller-supplied parent.
        let watcher_token = cancel_token.child_token();

        tokio::spawn(watch_network(
            self.network.clone(),
            Arc::clone(&cache),
            watcher_token.clone(),
        ));

        MiningStatsService {
            data_source: self.data_source,
            preferences: self.preferences,
            network: self.network,
            cache,
            watcher_token,
        }
    }
}

/// Clears every cached interval and the pool list whenever the current
/// network changes. Exits on cancellation or when the sender goes away.
async fn watch_network(
    mut network: watch::Receiver<Network>,
    cache: Arc<StatsCache>,
    token: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            changed = network.changed() => match changed {
                Ok(()) => {
                    let current = *network.borrow_and_update();

                    info!(network = ?current, "Network changed, clearing stats caches");
                    cache.clear().await;
                }
                //No sender left, so no further changes can arrive.
                Err(_) => break,
            },
        }
    }
}
