//! Terminal path search demo.
//!
//! Generates (or loads) a map, picks two walkable endpoints and runs one or
//! all search strategies over it, printing the map with the path drawn in.
//!
//! Run: cargo run --bin gridseek -- --width 40 --height 20 --block-probability 25
//!
//! Engine logs: RUST_LOG=debug cargo run --bin gridseek

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use gridseek_core::{CellType, Grid, Point};
use gridseek_paths::{HybridSearch, SearchConfig, Strategy};
use gridseek_world::{
    CellLayout, MapConfig, MapText, RayCaster, random_walkable, render, render_with_summary,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Path search demo over a random or hand-drawn grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Map height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Chance in percent that a cell is blocked
    #[arg(short, long)]
    block_probability: Option<u8>,

    /// Seed for the map and endpoint choice
    #[arg(long)]
    seed: Option<u64>,

    /// a-star, a-star-with-sight or bfs-with-sight
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Run every strategy on the same endpoints
    #[arg(long, conflicts_with = "strategy")]
    compare: bool,

    /// Searches per strategy, for timing
    #[arg(short, long)]
    repeat: Option<usize>,

    /// Start cell as x,y
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Goal cell as x,y
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,

    /// ASCII map file ('.', '#', optional 'S' and 'G'); replaces generation
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Settings read from `--config`. Command-line flags take precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    strategy: Strategy,
    repeat: usize,
    map: MapConfig,
    search: SearchConfig,
    layout: CellLayout,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AStarWithSight,
            repeat: 1,
            map: MapConfig::default(),
            search: SearchConfig::default(),
            layout: CellLayout::default(),
        }
    }
}

impl DemoConfig {
    fn load(args: &Args) -> Result<Self, Box<dyn Error>> {
        let mut config = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                let config: DemoConfig = toml::from_str(&text)?;
                log::info!("loaded configuration from {}", path.display());
                config
            }
            None => DemoConfig::default(),
        };
        if let Some(w) = args.width {
            config.map.width = w;
        }
        if let Some(h) = args.height {
            config.map.height = h;
        }
        if let Some(p) = args.block_probability {
            config.map.block_probability = p;
        }
        if let Some(seed) = args.seed {
            config.map.seed = Some(seed);
        }
        if let Some(s) = args.strategy {
            config.strategy = s;
        }
        if let Some(n) = args.repeat {
            config.repeat = n;
        }
        config.repeat = config.repeat.max(1);
        Ok(config)
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut config = DemoConfig::load(args)?;
    let seed = *config.map.seed.get_or_insert_with(rand::random);

    let (grid, markers) = match &args.map {
        Some(path) => {
            let map = MapText::parse(&std::fs::read_to_string(path)?)?;
            let markers = (map.start(), map.goal());
            (map.into_grid(), markers)
        }
        None => (config.map.generate()?, (None, None)),
    };

    // Endpoint choice gets its own stream so the map stays identical for a
    // given seed whatever endpoints are requested.
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let start = args
        .start
        .or(markers.0)
        .or_else(|| random_walkable(&grid, &mut rng))
        .ok_or("map has no walkable cell")?;
    let goal = args
        .goal
        .or(markers.1)
        .or_else(|| random_walkable(&grid, &mut rng))
        .ok_or("map has no walkable cell")?;

    println!(
        "{}x{} map, {} blocked, seed {seed}, {start} -> {goal}",
        grid.width(),
        grid.height(),
        grid.count(CellType::Blocked)
    );

    let oracle = RayCaster::with_layout(&grid, config.layout)?;
    let mut search = HybridSearch::with_config(&grid, config.search, oracle);
    let strategies: &[Strategy] = if args.compare {
        &Strategy::ALL
    } else {
        std::slice::from_ref(&config.strategy)
    };
    for &strategy in strategies {
        report(&mut search, &grid, strategy, start, goal, config.repeat);
    }
    Ok(())
}

fn report(
    search: &mut HybridSearch<'_, RayCaster<'_>>,
    grid: &Grid,
    strategy: Strategy,
    start: Point,
    goal: Point,
    repeat: usize,
) {
    let mut elapsed = Duration::ZERO;
    let mut outcome = None;
    for _ in 0..repeat {
        let t = Instant::now();
        let result = search.run(strategy, start, goal);
        elapsed += t.elapsed();
        outcome = Some(result);
    }
    let Some(result) = outcome else {
        return;
    };

    println!("\n== {strategy} ==");
    match result {
        Ok(path) => println!("{}", render_with_summary(grid, &path)),
        Err(e) => {
            println!("{}", render(grid, None));
            println!("no path: {e}");
        }
    }
    let stats = search.stats();
    println!(
        "{} expansions, {} sight checks, {:?} per search over {repeat} run(s)",
        stats.expansions,
        stats.sight_checks,
        per_run(elapsed, repeat)
    );
}

/// Mean time of one run; `repeat` is at least 1.
fn per_run(elapsed: Duration, repeat: usize) -> Duration {
    elapsed.div_f64(repeat.max(1) as f64)
}
