use crate::types::{DerivedPoolStat, MiningStats, MiningUnits, RawPoolsPayload};

//Pools the backend cannot attribute get a raster fallback logo.
const LOGO_BASE: &str = "/resources/mining-pools";
const UNKNOWN_SLUG: &str = "unknown";

/// Turn one raw backend payload into display-ready stats. Pure and total:
/// every division is guarded, missing numerics default to zero, and pool
/// order is preserved.
///
/// `pool_count` is the total-pool-count response header; anything that does
/// not parse as a base-10 integer counts as zero.
#[must_use]
pub fn derive_mining_stats(
    payload: RawPoolsPayload,
    pool_count: Option<&str>,
    units: MiningUnits,
) -> MiningStats {
    let block_count = payload.block_count.unwrap_or(0);
    //Guards the per-pool hashrate division when the window has no blocks.
    let safe_block_count = block_count.max(1);

    let hashrate = payload.last_estimated_hashrate.unwrap_or(0.0);
    let hashrate_3d = payload.last_estimated_hashrate_3d.unwrap_or(0.0);
    let hashrate_1w = payload.last_estimated_hashrate_1w.unwrap_or(0.0);

    let total_empty_blocks: u64 = payload
        .pools
        .iter()
        .map(|pool| pool.empty_blocks.unwrap_or(0))
        .sum();

    let pools = payload
        .pools
        .into_iter()
        .map(|pool| {
            let share = if block_count > 0 {
                round2(pool.block_count as f64 / block_count as f64 * 100.0)
            } else {
                0.0
            };

            //The network-wide estimate distributed by block share. An
            //approximation, not a measurement.
            let scale = |estimate: f64| {
                pool.block_count as f64 * estimate / safe_block_count as f64 / units.divider
            };
            let empty_blocks = pool.empty_blocks.unwrap_or(0);

            DerivedPoolStat {
                share,
                last_estimated_hashrate: scale(hashrate),
                last_estimated_hashrate_3d: scale(hashrate_3d),
                last_estimated_hashrate_1w: scale(hashrate_1w),
                empty_block_ratio: ratio_string(empty_blocks, pool.block_count),
                logo: pool_logo(&pool.slug),
                pool_id: pool.pool_id,
                name: pool.name,
                slug: pool.slug,
                rank: pool.rank,
                block_count: pool.block_count,
                empty_blocks,
            }
        })
        .collect();

    MiningStats {
        last_estimated_hashrate: hashrate / units.divider,
        last_estimated_hashrate_3d: hashrate_3d / units.divider,
        last_estimated_hashrate_1w: hashrate_1w / units.divider,
        block_count,
        total_empty_blocks,
        total_empty_block_ratio: ratio_string(total_empty_blocks, block_count),
        pools,
        total_pool_count: pool_count
            .and_then(|count| count.trim().parse::<u64>().ok())
            .unwrap_or(0),
        units,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//"0.00" rather than a division by zero when the denominator is empty.
fn ratio_string(part: u64, whole: u64) -> String {
    if whole > 0 {
        format!("{:.2}", round2(part as f64 / whole as f64 * 100.0))
    } else {
        String::from("0.00")
    }
}

fn pool_logo(slug: &str) -> String {
    let extension = if slug == UNKNOWN_SLUG { "png" } else { "svg" };

    format!("{}/{}.{}", LOGO_BASE, slug, extension)
}
