//! Turn-by-turn directions from a node route.
//!
//! A route is cut into segments, one per run of consecutive edges that share
//! a way name.  Each segment becomes a [`NavigationDirection`]: the turn that
//! starts it, the way it follows and how far.  The turn is classified from
//! the change in bearing between the last edge of the previous segment and
//! the first edge of the new one:
//!
//! | relative bearing | direction      |
//! |------------------|----------------|
//! | < −100           | sharp left     |
//! | [−100, −30)      | turn left      |
//! | [−30, −15)       | slight left    |
//! | [−15, 15)        | go straight    |
//! | [15, 30)         | slight right   |
//! | [30, 100)        | turn right     |
//! | ≥ 100            | sharp right    |
//!
//! # Text form
//!
//! ```text
//! Turn left on Bancroft Way and continue for 0.250 miles.
//! ```
//!
//! [`NavigationDirection`] renders to this form with `Display` and parses it
//! back with `FromStr`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use map_core::NodeId;

use crate::graph::SpatialGraph;
use crate::SpatialResult;

/// Way name used when an edge has no named way in common.
pub const UNKNOWN_ROAD: &str = "unknown road";

// ── Direction ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Start,
    Straight,
    SlightLeft,
    SlightRight,
    Right,
    Left,
    SharpLeft,
    SharpRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Start,
        Direction::Straight,
        Direction::SlightLeft,
        Direction::SlightRight,
        Direction::Right,
        Direction::Left,
        Direction::SharpLeft,
        Direction::SharpRight,
    ];

    /// Sentence-case label used in the text form.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Start       => "Start",
            Direction::Straight    => "Go straight",
            Direction::SlightLeft  => "Slight left",
            Direction::SlightRight => "Slight right",
            Direction::Right       => "Turn right",
            Direction::Left        => "Turn left",
            Direction::SharpLeft   => "Sharp left",
            Direction::SharpRight  => "Sharp right",
        }
    }

    pub fn from_label(label: &str) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.label() == label)
    }

    /// Classify the turn from `prev_bearing` to `cur_bearing` (degrees).
    pub fn from_bearings(prev_bearing: f64, cur_bearing: f64) -> Direction {
        let mut delta = cur_bearing - prev_bearing;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta <= -180.0 {
            delta += 360.0;
        }

        if delta < -100.0 {
            Direction::SharpLeft
        } else if delta < -30.0 {
            Direction::Left
        } else if delta < -15.0 {
            Direction::SlightLeft
        } else if delta < 15.0 {
            Direction::Straight
        } else if delta < 30.0 {
            Direction::SlightRight
        } else if delta < 100.0 {
            Direction::Right
        } else {
            Direction::SharpRight
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── NavigationDirection ───────────────────────────────────────────────────────

/// One instruction: which way to turn, onto what, and for how far.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationDirection {
    pub direction: Direction,
    pub way: String,
    /// Miles.  Full precision; the text form rounds to three decimals.
    pub distance: f64,
}

impl NavigationDirection {
    pub fn new(direction: Direction, way: impl Into<String>, distance: f64) -> Self {
        Self { direction, way: way.into(), distance }
    }

    /// Parse the text form, or `None` if it is malformed.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for NavigationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} and continue for {:.3} miles.",
            self.direction, self.way, self.distance
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectionParseError {
    #[error("not of the form \"<direction> on <way> and continue for <miles> miles.\"")]
    Malformed,

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("invalid distance {0:?}")]
    InvalidDistance(String),
}

impl FromStr for NavigationDirection {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_suffix(" miles.")
            .ok_or(DirectionParseError::Malformed)?;
        let (head, miles) = body
            .rsplit_once(" and continue for ")
            .ok_or(DirectionParseError::Malformed)?;
        // Labels never contain " on ", so the first occurrence ends the label
        // and the way name may contain it freely.
        let (label, way) = head
            .split_once(" on ")
            .ok_or(DirectionParseError::Malformed)?;

        let direction = Direction::from_label(label)
            .ok_or_else(|| DirectionParseError::UnknownDirection(label.to_string()))?;

        if miles.is_empty() || !miles.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(DirectionParseError::InvalidDistance(miles.to_string()));
        }
        let distance: f64 = miles
            .parse()
            .map_err(|_| DirectionParseError::InvalidDistance(miles.to_string()))?;

        Ok(NavigationDirection { direction, way: way.to_string(), distance })
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Name of the way shared by edge `(u, v)`; empty if there is none or it is
/// unnamed.
fn edge_way_name(graph: &SpatialGraph, u: NodeId, v: NodeId) -> SpatialResult<&str> {
    Ok(graph
        .common_way(u, v)?
        .and_then(|w| graph.way_name(w))
        .unwrap_or(""))
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { UNKNOWN_ROAD } else { name }
}

/// Convert a node route into turn-by-turn directions.
///
/// Routes with fewer than two nodes have no edges and produce no directions.
pub fn route_directions(
    graph: &SpatialGraph,
    route: &[NodeId],
) -> SpatialResult<Vec<NavigationDirection>> {
    if route.len() < 2 {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();

    let mut way = edge_way_name(graph, route[0], route[1])?;
    let mut current = NavigationDirection::new(
        Direction::Start,
        display_name(way),
        graph.distance(route[0], route[1])?,
    );

    for i in 1..route.len() - 1 {
        let (prev, here, next) = (route[i - 1], route[i], route[i + 1]);
        let next_way = edge_way_name(graph, here, next)?;

        if next_way != way {
            let direction = Direction::from_bearings(
                graph.bearing(prev, here)?,
                graph.bearing(here, next)?,
            );
            let finished = std::mem::replace(
                &mut current,
                NavigationDirection::new(direction, display_name(next_way), 0.0),
            );
            out.push(finished);
            way = next_way;
        }
        current.distance += graph.distance(here, next)?;
    }

    out.push(current);
    Ok(out)
}
