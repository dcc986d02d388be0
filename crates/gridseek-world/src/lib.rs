//! World utilities for gridseek: random and text maps, cell layout and a
//! ray-cast line-of-sight oracle.

pub mod error;
pub mod layout;
pub mod map_text;
pub mod mapgen;
pub mod raycast;

pub use error::MapError;
pub use layout::{CellLayout, WorldPoint};
pub use map_text::{MapText, render, render_with_summary};
pub use mapgen::{MapConfig, random_walkable};
pub use raycast::RayCaster;
