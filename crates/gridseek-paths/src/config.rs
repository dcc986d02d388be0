use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Tunables for a search engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of node expansions per search. `None` searches until
    /// the goal is found or the frontier is empty.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Cap the number of expansions per search (builder).
    pub const fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}

/// Which algorithm to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Plain A* over the 4-connected grid.
    #[default]
    AStar,
    /// A* that hops straight to the goal once it is in sight.
    AStarWithSight,
    /// Breadth-first search that hops straight to the goal once it is in sight.
    BfsWithSight,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::AStar, Self::AStarWithSight, Self::BfsWithSight];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "a-star",
            Self::AStarWithSight => "a-star-with-sight",
            Self::BfsWithSight => "bfs-with-sight",
        }
    }

    /// Whether the strategy consults a line-of-sight oracle.
    pub const fn uses_sight(self) -> bool {
        !matches!(self, Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}, expected one of a-star, a-star-with-sight, bfs-with-sight")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unbounded() {
        assert_eq!(SearchConfig::default().max_expansions, None);
        assert_eq!(
            SearchConfig::default().with_max_expansions(10).max_expansions,
            Some(10)
        );
    }

    #[test]
    fn strategy_names_parse_back() {
        for st in Strategy::ALL {
            assert_eq!(st.to_string().parse::<Strategy>(), Ok(st));
        }
        assert_eq!("A-Star".parse::<Strategy>(), Ok(Strategy::AStar));
        assert!("dijkstra".parse::<Strategy>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_fields_default_when_missing() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_expansions":5}"#).unwrap();
        assert_eq!(cfg.max_expansions, Some(5));
    }

    #[test]
    fn strategy_uses_kebab_case() {
        let json = serde_json::to_string(&Strategy::BfsWithSight).unwrap();
        assert_eq!(json, r#""bfs-with-sight""#);
    }
}
