use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A bus route: an ordered sequence of stop indices plus the metrics derived
/// from them at registration time. Metrics never change after
/// [`super::Catalogue::add_bus`] returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bus {
    pub name: Arc<str>,
    pub stops: Vec<u32>,
    pub ring: bool,
    pub length: u32,
    pub ideal_length: f64,
    pub count_stops: u32,
    pub count_unique_stops: u32,
}

impl Bus {
    /// `count_stops` per the ring/linear/empty rule: a ring reports the raw
    /// stop count, a linear route doubles it minus the shared endpoint, and
    /// an empty route (no stops given) reports zero regardless of `ring`.
    pub fn count_stops_for(stops: &[u32], ring: bool) -> u32 {
        if stops.is_empty() {
            0
        } else if ring {
            stops.len() as u32
        } else {
            (2 * stops.len() - 1) as u32
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Curvature: how much longer the road route is than the straight-line
    /// route. `>= 1.0` for any bus with at least one segment.
    pub fn curvature(&self) -> f64 {
        if self.ideal_length == 0.0 {
            0.0
        } else {
            self.length as f64 / self.ideal_length
        }
    }
}
