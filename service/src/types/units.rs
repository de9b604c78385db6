use crate::types::Network;
use serde::Serialize;

//Powers of ten and the label used to present a hashrate at that scale.
const POWER_TABLE: [(i32, &str); 7] = [
    (0, "H/s"),
    (3, "kH/s"),
    (6, "MH/s"),
    (9, "GH/s"),
    (12, "TH/s"),
    (15, "PH/s"),
    (18, "EH/s"),
];

/// Scale factor and label used to present large hashrate numbers compactly.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct MiningUnits {
    pub divider: f64,
    pub unit: &'static str,
}

impl MiningUnits {
    /// Display units for a network. Test networks have far less hashrate
    /// than the main chain, so they get a smaller scale.
    #[must_use]
    pub fn for_network(network: Network) -> Self {
        if network.is_test() {
            Self::from_exponent(12)
        } else {
            Self::from_exponent(18)
        }
    }

    fn from_exponent(exponent: i32) -> Self {
        let (exponent, unit) = POWER_TABLE
            .iter()
            .find(|(power, _)| *power == exponent)
            .copied()
            .unwrap_or(POWER_TABLE[POWER_TABLE.len() - 1]);

        MiningUnits {
            divider: 10f64.powi(exponent),
            unit,
        }
    }
}
