use crate::types::MiningUnits;
use serde::{Deserialize, Serialize};

/// One pool's raw counters for the requested window, as reported by the
/// backend.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawPoolStat {
    #[serde(default)]
    pub pool_id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub block_count: u64,
    //Backends omit this for pools that never mined an empty block.
    #[serde(default)]
    pub empty_blocks: Option<u64>,
    #[serde(default)]
    pub rank: Option<u32>,
}

/// Aggregate raw stats for one interval. Lives only for the duration of a
/// single derivation call.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawPoolsPayload {
    #[serde(default)]
    pub block_count: Option<u64>,
    #[serde(default)]
    pub last_estimated_hashrate: Option<f64>,
    #[serde(default, rename = "lastEstimatedHashrate3d")]
    pub last_estimated_hashrate_3d: Option<f64>,
    #[serde(default, rename = "lastEstimatedHashrate1w")]
    pub last_estimated_hashrate_1w: Option<f64>,
    #[serde(default)]
    pub pools: Vec<RawPoolStat>,
}

/// A pool's raw counters plus everything the presentation layer renders:
/// share of blocks, scaled hashrate estimates, empty-block ratio, logo path.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPoolStat {
    pub pool_id: u64,
    pub name: String,
    pub slug: String,
    pub rank: Option<u32>,
    pub block_count: u64,
    pub empty_blocks: u64,
    //Percentage in [0, 100], rounded to two decimals.
    pub share: f64,
    pub last_estimated_hashrate: f64,
    #[serde(rename = "lastEstimatedHashrate3d")]
    pub last_estimated_hashrate_3d: f64,
    #[serde(rename = "lastEstimatedHashrate1w")]
    pub last_estimated_hashrate_1w: f64,
    //Fixed two-decimal string, "0.00" when the pool mined no blocks.
    pub empty_block_ratio: String,
    pub logo: String,
}

/// Display-ready stats for one interval.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MiningStats {
    pub last_estimated_hashrate: f64,
    #[serde(rename = "lastEstimatedHashrate3d")]
    pub last_estimated_hashrate_3d: f64,
    #[serde(rename = "lastEstimatedHashrate1w")]
    pub last_estimated_hashrate_1w: f64,
    pub block_count: u64,
    pub total_empty_blocks: u64,
    pub total_empty_block_ratio: String,
    pub pools: Vec<DerivedPoolStat>,
    //Reported through a response header, independent of the payload body.
    pub total_pool_count: u64,
    pub units: MiningUnits,
}

impl MiningStats {
    /// The terminal value handed to the presentation layer when a fetch
    /// fails: structurally valid, all counts zero, units still correct.
    #[must_use]
    pub fn empty(units: MiningUnits) -> Self {
        MiningStats {
            last_estimated_hashrate: 0.0,
            last_estimated_hashrate_3d: 0.0,
            last_estimated_hashrate_1w: 0.0,
            block_count: 0,
            total_empty_blocks: 0,
            total_empty_block_ratio: String::from("0.00"),
            pools: Vec::new(),
            total_pool_count: 0,
            units,
        }
    }
}

/// Pool identity record, cached independently of any interval.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub pool_id: u64,
    pub name: String,
    pub slug: String,
}

impl From<&RawPoolStat> for PoolInfo {
    fn from(pool: &RawPoolStat) -> Self {
        PoolInfo {
            pool_id: pool.pool_id,
            name: pool.name.clone(),
            slug: pool.slug.clone(),
        }
    }
}
