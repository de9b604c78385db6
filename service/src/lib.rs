#[warn(clippy::pedantic)]
mod builder;
mod cache;
mod config;
mod deriver;
mod error;
mod service;
mod traits;
mod types;

pub use crate::{
    builder::MiningStatsServiceBuilder,
    config::CacheConfig,
    deriver::derive_mining_stats,
    error::Error,
    service::{MiningStatsService, MINING_WINDOW_PREFERENCE},
    traits::{PoolsDataSource, PoolsResponse, PreferenceStore},
    types::{
        DerivedPoolStat, MiningStats, MiningUnits, Network, PoolInfo, RawPoolStat, RawPoolsPayload,
        Timespan,
    },
};

pub type Result<T> = std::result::Result<T, Error>;
