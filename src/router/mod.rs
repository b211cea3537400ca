//! Precomputes all-pairs shortest paths over the route graph and answers
//! fastest-route queries.
//!
//! The reference implementation leaves the all-pairs algorithm unspecified
//! and only hands off a `DirectedWeightedGraph`; Floyd-Warshall with a
//! `next_edge` successor table is the idiomatic choice here over running
//! Dijkstra per query, since every stop pair is asked about at least once
//! in a typical request batch and the table is a one-time O(V^3) cost paid
//! once per process.

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::graph::{EdgeMeta, Graph};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoutingSettings {
    pub bus_wait_time: u32,
    pub bus_velocity: f64,
}

/// Everything the router needs besides the graph itself, and everything
/// that gets persisted alongside it: routing settings, per-edge transit
/// metadata, and the stop-name <-> vertex-id mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterMeta {
    pub routing_settings: RoutingSettings,
    pub edge_meta: Vec<EdgeMeta>,
    pub stop_index_by_vertex: Vec<u32>,
    pub vertex_by_stop_index: Vec<u32>,
}

impl RouterMeta {
    pub fn vertex_of_stop(&self, stop_index: u32) -> u32 {
        self.vertex_by_stop_index[stop_index as usize]
    }

    pub fn stop_of_vertex(&self, vertex: u32) -> u32 {
        self.stop_index_by_vertex[vertex as usize]
    }
}

#[derive(Debug, Clone)]
pub struct RouteSegment {
    pub boarding_vertex: u32,
    pub bus_index: u32,
    pub span_count: u32,
    pub wait_time: u32,
    pub ride_time: f64,
}

#[derive(Debug, Clone)]
pub struct Route {
    pub total_time: f64,
    pub segments: Vec<RouteSegment>,
}

const INF: f64 = f64::INFINITY;

/// All-pairs shortest-path table, built once over an immutable [`Graph`]
/// and never mutated afterward. Not persisted: cheap enough to recompute
/// on load and doing so keeps the persisted file limited to the graph
/// itself.
pub struct Router<'a> {
    graph: &'a Graph,
    meta: &'a RouterMeta,
    dist: Vec<f64>,
    next_edge: Vec<Option<u32>>,
    n: usize,
}

impl<'a> Router<'a> {
    pub fn build(graph: &'a Graph, meta: &'a RouterMeta) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![INF; n * n];
        let mut next_edge: Vec<Option<u32>> = vec![None; n * n];

        for v in 0..n {
            dist[v * n + v] = 0.0;
        }

        for v in 0..n as u32 {
            for &edge_id in graph.incident_edges(v) {
                let edge = graph.edge(edge_id);
                let cell = v as usize * n + edge.to as usize;
                if edge.weight < dist[cell] {
                    dist[cell] = edge.weight;
                    next_edge[cell] = Some(edge_id);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik == INF {
                    continue;
                }
                for j in 0..n {
                    let through = d_ik + dist[k * n + j];
                    if through < dist[i * n + j] {
                        dist[i * n + j] = through;
                        next_edge[i * n + j] = next_edge[i * n + k];
                    }
                }
            }
        }

        Self { graph, meta, dist, next_edge, n }
    }

    fn dist(&self, u: u32, v: u32) -> f64 {
        self.dist[u as usize * self.n + v as usize]
    }

    /// Builds the fastest route between two vertices, or `None` if `to` is
    /// unreachable from `from`. `from == to` returns an empty, zero-weight
    /// route without consulting the table.
    pub fn build_route(&self, from: u32, to: u32) -> Option<Route> {
        if from == to {
            return Some(Route { total_time: 0.0, segments: Vec::new() });
        }
        if self.dist(from, to) == INF {
            return None;
        }

        let mut segments = Vec::new();
        let mut current = from;
        while current != to {
            let edge_id = self.next_edge[current as usize * self.n + to as usize]?;
            let edge = self.graph.edge(edge_id);
            let meta = &self.meta.edge_meta[edge_id as usize];
            segments.push(RouteSegment {
                boarding_vertex: current,
                bus_index: meta.bus_index,
                span_count: meta.span_count,
                wait_time: self.meta.routing_settings.bus_wait_time,
                ride_time: edge.weight - self.meta.routing_settings.bus_wait_time as f64,
            });
            current = edge.to;
        }

        Some(Route { total_time: self.dist(from, to), segments })
    }
}

/// Resolves a stop name to its vertex id by way of the catalogue, for
/// callers that only have names. Panics on an unknown stop, mirroring the
/// catalogue's own lookup contract — callers check existence first.
pub fn vertex_of_stop_name(catalogue: &Catalogue, meta: &RouterMeta, name: &str) -> u32 {
    meta.vertex_of_stop(catalogue.index_of_stop(name))
}
