use async_trait::async_trait;
use poolstats_service::{
    Error, MiningStatsService, Network, PoolsDataSource, PoolsResponse, PreferenceStore,
    RawPoolStat, RawPoolsPayload, Timespan,
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex, Once,
    },
};
use tokio::sync::watch;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

pub fn init_telemetry() {
    let fmt_layer = fmt::layer();
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let subscriber = Registry::default().with(filter_layer).with(fmt_layer);

    set_global_default(subscriber).expect("Failed to set subscriber");
}

static LOGGER: Once = Once::new();

pub fn init() {
    LOGGER.call_once(|| {
        init_telemetry();
    });
}

/// Scriptable stand-in for the stats backend: serves a fixed payload, can be
/// told to fail, and records every request it sees.
#[derive(Clone, Default)]
pub struct MockDataSource {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    fail: AtomicBool,
    fetches: AtomicUsize,
    requests: Mutex<Vec<Option<Timespan>>>,
    payload: Mutex<RawPoolsPayload>,
    pool_count: Mutex<Option<String>>,
}

impl MockDataSource {
    pub fn with_payload(payload: RawPoolsPayload, pool_count: Option<&str>) -> Self {
        let mock = MockDataSource::default();
        *mock.inner.payload.lock().unwrap() = payload;
        *mock.inner.pool_count.lock().unwrap() = pool_count.map(str::to_owned);

        mock
    }

    pub fn set_fail(&self, fail: bool) {
        self.inner.fail.store(fail, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> usize {
        self.inner.fetches.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Option<Timespan>> {
        self.inner.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PoolsDataSource for MockDataSource {
    async fn list_pools(&self, interval: Option<Timespan>) -> Result<PoolsResponse, Error> {
        self.inner.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.requests.lock().unwrap().push(interval);

        if self.inner.fail.load(Ordering::SeqCst) {
            return Err(Error::Backend(String::from("connection refused")));
        }

        Ok(PoolsResponse {
            payload: self.inner.payload.lock().unwrap().clone(),
            pool_count: self.inner.pool_count.lock().unwrap().clone(),
        })
    }
}

#[derive(Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn get_value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

pub fn pool(slug: &str, block_count: u64, empty_blocks: Option<u64>) -> RawPoolStat {
    RawPoolStat {
        pool_id: 0,
        name: slug.to_owned(),
        slug: slug.to_owned(),
        block_count,
        empty_blocks,
        rank: None,
    }
}

pub fn sample_payload() -> RawPoolsPayload {
    RawPoolsPayload {
        block_count: Some(100),
        last_estimated_hashrate: Some(5e20),
        last_estimated_hashrate_3d: Some(4.9e20),
        last_estimated_hashrate_1w: Some(4.8e20),
        pools: vec![pool("foundryusa", 60, Some(1)), pool("antpool", 40, Some(0))],
    }
}

pub fn service_with(
    data_source: MockDataSource,
    preferences: MemoryPreferences,
) -> (
    MiningStatsService<MockDataSource, MemoryPreferences>,
    watch::Sender<Network>,
) {
    let (network_tx, network_rx) = watch::channel(Network::Mainnet);
    let service = MiningStatsService::builder(data_source, preferences, network_rx).build();

    (service, network_tx)
}
