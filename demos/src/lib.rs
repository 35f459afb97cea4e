//! Shared pieces of the tilemask demos.
//!
//! Demonstrates: painting obstacle categories onto a map, persisting the map
//! as JSON, and searching the same map under different obstacle masks.

use std::fs;
use std::io;
use std::path::Path;

use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use tilemask_core::{Point, TileMap, TileMapError};
use tilemask_paths::{PathData, TilePathfinder};

/// Wall category.
pub const WALL: u32 = 0b001;
/// Water category.
pub const WATER: u32 = 0b010;
/// Mud category.
pub const MUD: u32 = 0b100;

/// A search to run against the demo map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walker {
    pub name: String,
    /// Categories this walker cannot enter.
    pub mask: u32,
}

/// Demo settings, read from an optional JSON file.
///
/// Missing fields fall back to [`DemoConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    /// Share of tiles painted with some category, in `[0, 1]`.
    pub density: f64,
    pub start: Point,
    pub goal: Point,
    pub walkers: Vec<Walker>,
    /// Load the map from this JSON tile map instead of generating one.
    pub load_map: Option<String>,
    /// Write the map used to this path.
    pub save_map: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 16,
            seed: 42,
            density: 0.3,
            start: Point::new(0, 0),
            goal: Point::new(39, 15),
            walkers: vec![
                Walker {
                    name: "walker".into(),
                    mask: WALL | WATER | MUD,
                },
                Walker {
                    name: "swimmer".into(),
                    mask: WALL | MUD,
                },
                Walker {
                    name: "ghost".into(),
                    mask: 0,
                },
            ],
            load_map: None,
            save_map: None,
        }
    }
}

impl DemoConfig {
    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(io::Error::from)
    }
}

/// Paint random categories onto an open map. `start` and `goal` stay open.
pub fn generate_map(cfg: &DemoConfig) -> Result<TileMap, TileMapError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(cfg.seed);
    let mut map = TileMap::new(cfg.width, cfg.height, 0)?;
    let categories = [WALL, WATER, MUD];
    for p in map.bounds() {
        if rng.random_bool(cfg.density.clamp(0.0, 1.0)) {
            let t = categories[rng.random_range(0..categories.len())];
            map.set_type(p, t);
        }
    }
    for p in [cfg.start, cfg.goal] {
        if map.contains(p) {
            map.set_type(p, 0);
        }
    }
    Ok(map)
}

/// Read a JSON tile map and check its dimensions.
pub fn load_map(path: impl AsRef<Path>) -> io::Result<TileMap> {
    let text = fs::read_to_string(path)?;
    let map: TileMap = serde_json::from_str(&text).map_err(io::Error::from)?;
    map.validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(map)
}

/// Write a tile map as JSON.
pub fn save_map(map: &TileMap, path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string(map).map_err(io::Error::from)?;
    fs::write(path, json)
}

fn glyph(t: u32) -> char {
    match t {
        0 => '.',
        WALL => '#',
        WATER => '~',
        MUD => ',',
        _ => '?',
    }
}

/// Draw the map with north at the top. `S`/`G` mark the endpoints and `*`
/// the path.
pub fn render(pf: &TilePathfinder, start: Point, goal: Point) -> String {
    let grid = pf.grid();
    let on_path: Vec<Point> = pf.path().map(PathData::pos).collect();
    let mut out = String::with_capacity(grid.size() + grid.height() as usize);
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if on_path.contains(&p) {
                '*'
            } else {
                glyph(grid.get_type(p))
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One line per step, start first.
pub fn describe_path(pf: &TilePathfinder) -> String {
    pf.path()
        .enumerate()
        .map(|(i, step)| format!("{i:3}: {} type={}\n", step.pos(), step.t))
        .collect()
}
