//! Terminal demo: one map, several walkers with different obstacle masks.
//!
//! Run: cargo run --bin pathdemo [config.json]
//! Set RUST_LOG=debug to see search statistics.

use std::error::Error;

use tilemask_demos::{DemoConfig, describe_path, generate_map, load_map, render, save_map};
use tilemask_paths::{SearchOutcome, TilePathfinder};

fn run() -> Result<(), Box<dyn Error>> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(&path)?,
        None => DemoConfig::default(),
    };

    let map = match &cfg.load_map {
        Some(path) => load_map(path)?,
        None => generate_map(&cfg)?,
    };
    log::info!("map {}x{}, seed {}", map.width(), map.height(), cfg.seed);
    for p in [cfg.start, cfg.goal] {
        if !map.contains(p) {
            return Err(format!("endpoint {p} is outside the map").into());
        }
    }

    if let Some(path) = &cfg.save_map {
        save_map(&map, path)?;
        log::info!("map written to {path}");
    }

    let mut pf = TilePathfinder::from_tilemap(&map)?;
    for walker in &cfg.walkers {
        let outcome = pf.search(cfg.start, cfg.goal, walker.mask);
        println!("== {} (mask {:#05b})", walker.name, walker.mask);
        match outcome {
            SearchOutcome::Found(n) => println!("{n} steps"),
            SearchOutcome::AlreadyThere => println!("already at the goal"),
            SearchOutcome::Unreachable => println!("no path"),
        }
        print!("{}", render(&pf, cfg.start, cfg.goal));
        if log::log_enabled!(log::Level::Debug) {
            print!("{}", describe_path(&pf));
        }
        println!();
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
