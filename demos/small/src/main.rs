//! small — smallest end-to-end example for the rust_maps query engine.
//!
//! Builds a 9-intersection grid south of the Berkeley campus, then answers one
//! of each query class: a route with turn-by-turn directions, prefix and
//! exact-name searches, and a tile selection.
//!
//! Usage: `small [config.json]`.  Without an argument, `MapConfig::default()`
//! is used; the effective configuration is printed as JSON either way.

mod network;

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{Level, info};

use map_core::{BoundingBox, GeoPoint, MapConfig};
use map_raster::RasterRequest;

use network::build_berkeley;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Just outside the north-west and south-east corners of the grid.
const START: (f64, f64) = (-122.2690, 37.8703);
const DEST:  (f64, f64) = (-122.2581, 37.8627);

const VIEWPORT_PX: f64 = 1_024.0;

fn load_config() -> Result<MapConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            let config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {path}"))?;
            Ok(config)
        }
        None => Ok(MapConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    println!("=== small — rust_maps query engine ===");

    // 1. Configuration.
    let config = load_config()?;
    println!("Config: {}", serde_json::to_string(&config)?);
    println!();

    // 2. Ingest and freeze.
    let t0 = Instant::now();
    let map = build_berkeley()?.build(config)?;
    info!(elapsed_us = t0.elapsed().as_micros() as u64, "map ready");
    println!(
        "Road graph: {} nodes, {} ways",
        map.graph().node_count(),
        map.graph().way_count()
    );
    println!();

    // 3. Route with directions.
    let start = GeoPoint::new(START.0, START.1);
    let dest = GeoPoint::new(DEST.0, DEST.1);
    let (route, directions) = map.navigate(start, dest)?;
    println!(
        "Route {start} → {dest}: {} nodes, {:.3} miles",
        route.len(),
        route.total_miles
    );
    for d in &directions {
        println!("  {d}");
    }
    println!();

    // 4. Batch routing, both directions.
    let batch = map.route_many(&[(start, dest), (dest, start)]);
    for (i, r) in batch.iter().enumerate() {
        match r {
            Ok(route) => println!("Batch route {i}: {:.3} miles", route.total_miles),
            Err(e) => println!("Batch route {i}: {e}"),
        }
    }
    println!();

    // 5. Search.
    println!("Prefix \"top\": {:?}", map.search_by_prefix("top"));
    println!("Prefix \"CHEESE\": {:?}", map.search_by_prefix("CHEESE"));
    for loc in map.search_by_exact_name("Top Dog") {
        println!("  Top Dog #{} at {}", loc.id.get(), loc.point);
    }
    println!();

    // 6. Tiles for the whole map and for a viewport around the grid.
    let root = map.config().raster.root;
    let viewport = BoundingBox::new(-122.2700, 37.8710, -122.2570, 37.8620);
    for (label, bbox) in [("root", root), ("grid", viewport)] {
        let grid = map.select_tiles(&RasterRequest::new(bbox, VIEWPORT_PX));
        println!(
            "Tiles for {label}: depth {}, {} × {}, success = {}",
            grid.depth,
            grid.cols(),
            grid.rows(),
            grid.query_success
        );
        if let Some(first) = grid.render_grid.first().and_then(|row| row.first()) {
            println!("  first tile: {first}");
        }
    }

    Ok(())
}
