//! Strongly typed identifier wrappers.
//!
//! Ids come from the ingestion source (OSM-style signed 64-bit integers) and
//! are stable for the lifetime of the process.  They are `Copy + Ord + Hash`
//! so they can key maps and break ties in priority queues without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw ingestion id.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// Id of a routing node (road intersection or shape point).
    pub struct NodeId(i64);
}

typed_id! {
    /// Id of a way: a road or path made of an ordered run of nodes.
    pub struct WayId(i64);
}

typed_id! {
    /// Id of a named point of interest.  Shares no id space with `NodeId`.
    pub struct LocationId(i64);
}
