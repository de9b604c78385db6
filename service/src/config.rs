use std::{sync::Arc, time::Duration};

#[derive(Default, Clone)]
pub struct ConfigManager {
    config: Arc<Config>,
}

impl ConfigManager {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    // Helpers
    pub(crate) fn cache_ttl(&self) -> Duration {
        self.config.cache.ttl
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub(crate) cache: CacheConfig,
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    //Entries older than this behave as misses and are refetched.
    pub(crate) ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl: Duration::from_secs(300),
        }
    }
}
