#[derive(thiserror::Error, Debug)]
pub enum Error {
    //Reported by PoolsDataSource implementations; the service recovers from
    //it locally and never surfaces it to callers.
    #[error("Pools backend request failed: {0}")]
    Backend(String),
    #[error("Unrecognized timespan token: {0}")]
    UnknownTimespan(String),
    #[error(transparent)]
    Json(#[from] serde_json::error::Error),
}
