//! Path planning over sensor-derived partial maps.

mod route;

pub use route::{is_dead_end, route_home, KnownMap};
