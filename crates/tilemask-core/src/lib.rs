//! **tilemask-core** — core types for masked tile pathfinding.
//!
//! This crate provides the value types shared by the *tilemask* crates:
//! integer geometry ([`Point`], [`Range`]) and the row-major classification
//! array ([`TileMap`]) that editors persist and grids are built from.

pub mod geom;
pub mod tilemap;

pub use geom::{Point, Range, RangeIter};
pub use tilemap::{TileMap, TileMapError};
