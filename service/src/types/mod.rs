mod network;
mod stats;
mod timespan;
mod units;

pub use network::Network;
pub use stats::{DerivedPoolStat, MiningStats, PoolInfo, RawPoolStat, RawPoolsPayload};
pub use timespan::Timespan;
pub use units::MiningUnits;
