use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketKind {
    Stock,
    Crypto,
    Forex,
}

impl MarketKind {
    pub const ALL: [Self; 3] = [Self::Stock, Self::Crypto, Self::Forex];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Crypto => "crypto",
            Self::Forex => "forex",
        }
    }

    pub fn profile(self) -> MarketProfile {
        match self {
            Self::Stock => MarketProfile {
                kind: self,
                up_probability: 0.48,
                down_probability: 0.47,
                flat_probability: 0.05,
                avg_change_pct: 1.2,
                commission: 0.002,
            },
            Self::Crypto => MarketProfile {
                kind: self,
                up_probability: 0.49,
                down_probability: 0.48,
                flat_probability: 0.03,
                avg_change_pct: 2.5,
                commission: 0.001,
            },
            Self::Forex => MarketProfile {
                kind: self,
                up_probability: 0.46,
                down_probability: 0.46,
                flat_probability: 0.08,
                avg_change_pct: 0.4,
                commission: 0.0005,
            },
        }
    }
}

/// Probability table and fee schedule for one market kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketProfile {
    pub kind: MarketKind,
    pub up_probability: f64,
    pub down_probability: f64,
    pub flat_probability: f64,
    /// Scale of the half-normal move size, in percent.
    pub avg_change_pct: f64,
    /// Fraction of the returned amount kept by the venue.
    pub commission: f64,
}

pub fn market_catalog() -> Vec<MarketProfile> {
    MarketKind::ALL.into_iter().map(MarketKind::profile).collect()
}

#[cfg(test)]
mod tests {
    use super::{market_catalog, MarketKind};

    #[test]
    fn every_profile_is_a_probability_distribution() {
        for profile in market_catalog() {
            let total =
                profile.up_probability + profile.down_probability + profile.flat_probability;
            assert!((total - 1.0).abs() < 1e-12, "{:?} sums to {total}", profile.kind);
            assert!(profile.commission >= 0.0 && profile.commission < 1.0);
            assert!(profile.avg_change_pct > 0.0);
        }
    }

    #[test]
    fn market_kind_deserializes_from_snake_case() {
        let kind: MarketKind = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(kind, MarketKind::Crypto);
        assert_eq!(kind.as_str(), "crypto");
    }
}
