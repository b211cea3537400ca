use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A named point riders board or alight at.
///
/// `road_distances` holds directional overrides authored on this stop only
/// (`this -> target`); the reverse direction, if present, lives on the
/// target stop's own map. `bus_memberships` is kept sorted by bus name and
/// de-duplicated as buses are registered, so `Stop::buses` never needs a
/// sort at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    pub name: Arc<str>,
    pub coord: Coordinate,
    pub road_distances: HashMap<u32, u32>,
    pub bus_memberships: Vec<u32>,
}

impl Stop {
    pub fn new(name: Arc<str>, coord: Coordinate) -> Self {
        Self {
            name,
            coord,
            road_distances: HashMap::new(),
            bus_memberships: Vec::new(),
        }
    }

    /// Inserts `bus_index` into `bus_memberships` keeping it sorted by the
    /// bus name the caller supplies, without creating a duplicate entry for
    /// a bus that visits this stop more than once.
    pub(crate) fn register_bus(&mut self, bus_index: u32, bus_name: &str, bus_names: &[Arc<str>]) {
        let pos = self
            .bus_memberships
            .partition_point(|&idx| &*bus_names[idx as usize] < bus_name);
        if self.bus_memberships.get(pos) != Some(&bus_index) {
            self.bus_memberships.insert(pos, bus_index);
        }
    }
}
