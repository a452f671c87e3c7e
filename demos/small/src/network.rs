//! Synthetic slice of Berkeley, CA used by the demo.
//!
//! Nine intersections on a 3 × 3 grid south of campus, three named streets
//! running east–west and three north–south, plus a handful of named places.

use map_core::{LocationId, NodeId, WayId};
use map_service::{MapBuilder, ServiceResult};

const LONS: [f64; 3] = [-122.2685, -122.2635, -122.2585];
const LATS: [f64; 3] = [37.8700, 37.8665, 37.8630];

const EAST_WEST: [&str; 3] = ["Bancroft Way", "Durant Avenue", "Channing Way"];
const NORTH_SOUTH: [&str; 3] = ["Shattuck Avenue", "Telegraph Avenue", "College Avenue"];

fn node(col: usize, row: usize) -> NodeId {
    NodeId((row * 3 + col) as i64 + 1)
}

/// Feed the grid and its places into a fresh builder.
pub fn build_berkeley() -> ServiceResult<MapBuilder> {
    let mut b = MapBuilder::with_capacity(9, 6);

    for (row, &lat) in LATS.iter().enumerate() {
        for (col, &lon) in LONS.iter().enumerate() {
            b.add_node(node(col, row), lon, lat)?;
        }
    }

    for (row, name) in EAST_WEST.iter().enumerate() {
        let way = WayId(100 + row as i64);
        b.add_way(way, Some(name.to_string()), Some("residential".into()), Some("25 mph".into()))?;
        for col in 0..3 {
            b.associate_node_with_way(node(col, row), way)?;
            if col > 0 {
                b.add_adjacency(node(col - 1, row), node(col, row))?;
            }
        }
    }

    for (col, name) in NORTH_SOUTH.iter().enumerate() {
        let way = WayId(200 + col as i64);
        b.add_way(way, Some(name.to_string()), Some("secondary".into()), None)?;
        for row in 0..3 {
            b.associate_node_with_way(node(col, row), way)?;
            if row > 0 {
                b.add_adjacency(node(col, row - 1), node(col, row))?;
            }
        }
    }

    let places = [
        (1, -122.2683, 37.8698, "Top Dog"),
        (2, -122.2588, 37.8668, "Top Dog"),
        (3, -122.2634, 37.8632, "Cheese Board Collective"),
        (4, -122.2611, 37.8702, "Caffe Strada"),
        (5, -122.2660, 37.8664, "Top of the Hill Books"),
    ];
    for (id, lon, lat, name) in places {
        b.add_location(LocationId(id), lon, lat, name)?;
    }
    b.register_location("Cheeseboard", LocationId(3))?;

    Ok(b)
}
