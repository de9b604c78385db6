use serde::{Deserialize, Serialize};

/// The chain a client is currently looking at. The set is closed, so any
/// network this crate has never heard of simply cannot be represented and
/// the main-network defaults apply.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Testnet4,
    Signet,
}

impl Network {
    #[must_use]
    pub fn is_test(&self) -> bool {
        !matches!(self, Network::Mainnet)
    }
}
