use crate::types::{RawPoolsPayload, Timespan};
use crate::Result;
use async_trait::async_trait;

/// One backend response: the decoded stats body plus the total-pool-count
/// response header, carried verbatim so the deriver owns the parsing rules.
#[derive(Clone, Debug)]
pub struct PoolsResponse {
    pub payload: RawPoolsPayload,
    pub pool_count: Option<String>,
}

impl PoolsResponse {
    //Convenience for implementations that receive a raw JSON body.
    pub fn from_json(body: &str, pool_count: Option<String>) -> Result<Self> {
        Ok(PoolsResponse {
            payload: serde_json::from_str(body)?,
            pool_count,
        })
    }
}

/// The backend that serves pool stats. `interval = None` requests the
/// unfiltered full pool list rather than interval-scoped stats.
#[async_trait]
pub trait PoolsDataSource: Sync + Send {
    async fn list_pools(&self, interval: Option<Timespan>) -> Result<PoolsResponse>;
}

/// Persistent key/value store holding user preferences.
#[async_trait]
pub trait PreferenceStore: Sync + Send {
    async fn get_value(&self, key: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_body() {
        let body = r#"{
            "blockCount": 144,
            "lastEstimatedHashrate": 5e20,
            "lastEstimatedHashrate3d": 4.9e20,
            "lastEstimatedHashrate1w": 4.8e20,
            "pools": [
                {"poolId": 3, "name": "Foundry USA", "slug": "foundryusa",
                 "blockCount": 60, "emptyBlocks": 1, "rank": 1},
                {"name": "Unknown", "slug": "unknown", "blockCount": 4}
            ]
        }"#;

        let response = PoolsResponse::from_json(body, Some(String::from("2"))).unwrap();
        let payload = response.payload;

        assert_eq!(payload.block_count, Some(144));
        assert_eq!(payload.last_estimated_hashrate, Some(5e20));
        assert_eq!(payload.last_estimated_hashrate_3d, Some(4.9e20));
        assert_eq!(payload.last_estimated_hashrate_1w, Some(4.8e20));
        assert_eq!(payload.pools.len(), 2);
        assert_eq!(payload.pools[0].pool_id, 3);
        assert_eq!(payload.pools[0].empty_blocks, Some(1));
        assert_eq!(payload.pools[1].pool_id, 0);
        assert_eq!(payload.pools[1].empty_blocks, None);
        assert_eq!(payload.pools[1].rank, None);
        assert_eq!(response.pool_count.as_deref(), Some("2"));
    }

    #[test]
    fn malformed_body_errors() {
        assert!(PoolsResponse::from_json("not json", None).is_err());
    }
}
