//! Random obstacle placement.

use gridseek_core::{CellType, Grid, Point};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::error::MapError;

/// Parameters for a randomly blocked map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
    /// Chance in percent, `0..100`, that any one cell is blocked.
    pub block_probability: u8,
    /// Fixed seed for a reproducible map. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            block_probability: 10,
            seed: None,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), MapError> {
        if self.block_probability >= 100 {
            return Err(MapError::InvalidProbability(self.block_probability));
        }
        Ok(())
    }

    /// Generate a map, seeded if [`seed`](Self::seed) is set.
    pub fn generate(&self) -> Result<Grid, MapError> {
        match self.seed {
            Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::rng()),
        }
    }

    /// Generate a map drawing from `rng`: one draw in `0..100` per cell,
    /// blocked when the draw falls below the block probability.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, MapError> {
        self.validate()?;
        let threshold = self.block_probability;
        let grid = Grid::new(self.width, self.height, |_| {
            if rng.random_range(0..100u8) < threshold {
                CellType::Blocked
            } else {
                CellType::Walkable
            }
        })?;
        log::debug!(
            "generated {}x{} map with {} blocked cells",
            self.width,
            self.height,
            grid.count(CellType::Blocked)
        );
        Ok(grid)
    }
}

/// Pick a uniformly random walkable cell, or `None` if there is none.
pub fn random_walkable<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Point> {
    let walkable = grid.count(CellType::Walkable);
    if walkable == 0 {
        return None;
    }
    let nth = rng.random_range(0..walkable);
    grid.iter()
        .filter(|(_, c)| c.is_walkable())
        .nth(nth)
        .map(|(p, _)| p)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: MapConfig = serde_json::from_str(r#"{"width":40,"seed":3}"#).unwrap();
        assert_eq!(cfg.width, 40);
        assert_eq!(cfg.height, 5);
        assert_eq!(cfg.block_probability, 10);
        assert_eq!(cfg.seed, Some(3));
    }
}
