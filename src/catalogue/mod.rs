//! Arena-backed store of stops and buses.
//!
//! Stops and buses live in growable, append-only `Vec`s and are referenced
//! everywhere else in the crate by their stable `u32` position rather than
//! by pointer, so a [`Catalogue`] has no internal cycles and derives
//! `Serialize`/`Deserialize` for free.

mod bus;
mod stop;

pub use bus::Bus;
pub use stop::Stop;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<Arc<str>, u32>,
    bus_index: HashMap<Arc<str>, u32>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn add_stop(&mut self, name: &str, coord: Coordinate) -> u32 {
        if let Some(&idx) = self.stop_index.get(name) {
            self.stops[idx as usize].coord = coord;
            return idx;
        }
        let name: Arc<str> = Arc::from(name);
        let idx = self.stops.len() as u32;
        self.stops.push(Stop::new(name.clone(), coord));
        self.stop_index.insert(name, idx);
        idx
    }

    /// Records a directional road-distance override `from -> to`. Both
    /// stops must already exist; this is called only while walking input
    /// that has already created every stop it mentions.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) {
        let from_idx = self.index_of_stop(from);
        let to_idx = self.index_of_stop(to);
        self.stops[from_idx as usize]
            .road_distances
            .insert(to_idx, meters);
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|&idx| &self.stops[idx as usize])
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|&idx| &self.buses[idx as usize])
    }

    pub fn index_of_stop(&self, name: &str) -> u32 {
        *self
            .stop_index
            .get(name)
            .unwrap_or_else(|| panic!("unknown stop referenced: {name}"))
    }

    pub fn index_of_bus(&self, name: &str) -> u32 {
        *self
            .bus_index
            .get(name)
            .unwrap_or_else(|| panic!("unknown bus referenced: {name}"))
    }

    /// Registers a bus, resolving `stop_names` against already-registered
    /// stops and computing its derived metrics once. `stop_names` may be
    /// empty; the resulting bus is then reported as absent by stat queries
    /// even though it occupies a slot in the arena.
    pub fn add_bus(&mut self, name: &str, stop_names: &[&str], ring: bool) -> u32 {
        let stops: Vec<u32> = stop_names.iter().map(|s| self.index_of_stop(s)).collect();

        let length = route_length(&self.stops, &stops, ring);
        let ideal_length = ideal_route_length(&self.stops, &stops, ring);
        let count_stops = Bus::count_stops_for(&stops, ring);
        let count_unique_stops = unique_stop_count(&stops);

        let name: Arc<str> = Arc::from(name);
        let idx = self.buses.len() as u32;
        self.buses.push(Bus {
            name: name.clone(),
            stops: stops.clone(),
            ring,
            length,
            ideal_length,
            count_stops,
            count_unique_stops,
        });
        self.bus_index.insert(name, idx);

        let bus_names: Vec<Arc<str>> = self.buses.iter().map(|b| b.name.clone()).collect();
        for &stop_idx in &stops {
            self.stops[stop_idx as usize].register_bus(idx, &self.buses[idx as usize].name, &bus_names);
        }

        idx
    }
}

/// Road distance from `from` to `to`: the override stored on `from` if one
/// exists, else the override stored on `to` (traveled in reverse), else a
/// data-integrity violation. This is the rule shared by ring buses and by
/// every graph edge — never the linear-route doubling rule.
pub fn directional_distance(stops: &[Stop], from: u32, to: u32) -> u32 {
    if let Some(&d) = stops[from as usize].road_distances.get(&to) {
        return d;
    }
    if let Some(&d) = stops[to as usize].road_distances.get(&from) {
        return d;
    }
    panic!(
        "no road distance recorded between stops {} and {}",
        stops[from as usize].name, stops[to as usize].name
    );
}

/// Round-trip distance for one adjacent pair on a linear route: the sum of
/// both directions if both were given, else twice whichever direction was.
fn linear_pair_distance(stops: &[Stop], a: u32, b: u32) -> u32 {
    let fwd = stops[a as usize].road_distances.get(&b).copied();
    let bwd = stops[b as usize].road_distances.get(&a).copied();
    match (fwd, bwd) {
        (Some(f), Some(r)) => f + r,
        (Some(f), None) => 2 * f,
        (None, Some(r)) => 2 * r,
        (None, None) => panic!(
            "no road distance recorded between stops {} and {}",
            stops[a as usize].name, stops[b as usize].name
        ),
    }
}

fn route_length(stops: &[Stop], sequence: &[u32], ring: bool) -> u32 {
    if sequence.len() < 2 {
        return 0;
    }
    let pairs = sequence.windows(2);
    if ring {
        pairs.map(|w| directional_distance(stops, w[0], w[1])).sum()
    } else {
        pairs.map(|w| linear_pair_distance(stops, w[0], w[1])).sum()
    }
}

fn ideal_route_length(stops: &[Stop], sequence: &[u32], ring: bool) -> f64 {
    if sequence.len() < 2 {
        return 0.0;
    }
    let one_way: f64 = sequence
        .windows(2)
        .map(|w| {
            stops[w[0] as usize]
                .coord
                .distance_to(&stops[w[1] as usize].coord)
        })
        .sum();
    if ring {
        one_way
    } else {
        one_way * 2.0
    }
}

fn unique_stop_count(sequence: &[u32]) -> u32 {
    let mut seen: Vec<u32> = sequence.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len() as u32
}
