//! Core types for order generation

use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which order strategy to play a playlist in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderKind {
    /// Every item once, in playlist order
    #[default]
    Ordered,

    /// Playlist order, starting over after the last item
    OrderedCycle,

    /// Every item once, in random order
    Random,

    /// One random order, replayed forever
    RandomCycle,

    /// A fresh random order for every pass
    RandomCycleRegenerate,
}

impl OrderKind {
    /// All strategies, in declaration order
    pub const ALL: [OrderKind; 5] = [
        OrderKind::Ordered,
        OrderKind::OrderedCycle,
        OrderKind::Random,
        OrderKind::RandomCycle,
        OrderKind::RandomCycleRegenerate,
    ];

    /// Cycling strategies never run out of items
    pub fn is_cycling(self) -> bool {
        matches!(
            self,
            OrderKind::OrderedCycle | OrderKind::RandomCycle | OrderKind::RandomCycleRegenerate
        )
    }

    /// Whether the strategy consumes a random source
    pub fn is_random(self) -> bool {
        matches!(
            self,
            OrderKind::Random | OrderKind::RandomCycle | OrderKind::RandomCycleRegenerate
        )
    }

    /// Canonical (kebab-case) name
    pub fn as_str(self) -> &'static str {
        match self {
            OrderKind::Ordered => "ordered",
            OrderKind::OrderedCycle => "ordered-cycle",
            OrderKind::Random => "random",
            OrderKind::RandomCycle => "random-cycle",
            OrderKind::RandomCycleRegenerate => "random-cycle-regenerate",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = OrderError;

    /// Accepts kebab-case, snake_case and any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        OrderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| OrderError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for kind in OrderKind::ALL {
            assert_eq!(kind.as_str().parse::<OrderKind>(), Ok(kind));
        }
    }

    #[test]
    fn parses_snake_case_and_upper_case() {
        assert_eq!(
            "RANDOM_CYCLE".parse::<OrderKind>(),
            Ok(OrderKind::RandomCycle)
        );
        assert_eq!(
            " ordered_cycle ".parse::<OrderKind>(),
            Ok(OrderKind::OrderedCycle)
        );
    }

    #[test]
    fn rejects_unknown_name() {
        assert_eq!(
            "sideways".parse::<OrderKind>(),
            Err(OrderError::UnknownStrategy("sideways".to_string()))
        );
    }

    #[test]
    fn cycling_and_random_flags() {
        assert!(!OrderKind::Ordered.is_cycling());
        assert!(!OrderKind::Random.is_cycling());
        assert!(OrderKind::OrderedCycle.is_cycling());
        assert!(OrderKind::RandomCycleRegenerate.is_cycling());

        assert!(!OrderKind::OrderedCycle.is_random());
        assert!(OrderKind::RandomCycle.is_random());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&OrderKind::RandomCycleRegenerate).unwrap();
        assert_eq!(json, "\"random-cycle-regenerate\"");

        let kind: OrderKind = serde_json::from_str("\"ordered-cycle\"").unwrap();
        assert_eq!(kind, OrderKind::OrderedCycle);
    }

    #[test]
    fn default_is_ordered() {
        assert_eq!(OrderKind::default(), OrderKind::Ordered);
    }
}
