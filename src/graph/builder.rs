use crate::catalogue::{directional_distance, Catalogue};
use crate::router::{RouterMeta, RoutingSettings};

use super::{Edge, EdgeMeta, Graph};

/// Minutes-per-meter conversion factor for a given km/h velocity: distance
/// in meters divided by `velocity_km_h * 1000.0 / 60.0` yields minutes.
fn meters_per_minute(velocity_km_h: f64) -> f64 {
    velocity_km_h * 1000.0 / 60.0
}

/// Builds the route graph and its accompanying router metadata. Vertices
/// are assigned densely over every stop in the catalogue (not just
/// bus-served ones) in lexicographic name order, so an isolated stop still
/// gets a vertex id even though no edge will ever touch it.
pub fn build_route_graph(catalogue: &Catalogue, routing_settings: RoutingSettings) -> (Graph, RouterMeta) {
    let mut stop_order: Vec<u32> = (0..catalogue.stop_count() as u32).collect();
    stop_order.sort_by(|&a, &b| catalogue.stops()[a as usize].name.cmp(&catalogue.stops()[b as usize].name));

    let mut vertex_by_stop_index = vec![0u32; catalogue.stop_count()];
    let mut stop_index_by_vertex = vec![0u32; catalogue.stop_count()];
    for (vertex, &stop_idx) in stop_order.iter().enumerate() {
        vertex_by_stop_index[stop_idx as usize] = vertex as u32;
        stop_index_by_vertex[vertex] = stop_idx;
    }

    let mut graph = Graph::with_vertex_count(catalogue.stop_count());
    let mut edge_meta = Vec::new();
    let speed = meters_per_minute(routing_settings.bus_velocity);

    for (bus_index, bus) in catalogue.buses().iter().enumerate() {
        if bus.stops.len() < 2 {
            continue;
        }
        add_edges_for_traversal(
            &bus.stops,
            bus_index as u32,
            catalogue,
            &vertex_by_stop_index,
            routing_settings,
            speed,
            &mut graph,
            &mut edge_meta,
        );
        if !bus.ring {
            let mut reversed = bus.stops.clone();
            reversed.reverse();
            add_edges_for_traversal(
                &reversed,
                bus_index as u32,
                catalogue,
                &vertex_by_stop_index,
                routing_settings,
                speed,
                &mut graph,
                &mut edge_meta,
            );
        }
    }

    (
        graph,
        RouterMeta {
            routing_settings,
            edge_meta,
            stop_index_by_vertex,
            vertex_by_stop_index,
        },
    )
}

#[allow(clippy::too_many_arguments)]
fn add_edges_for_traversal(
    sequence: &[u32],
    bus_index: u32,
    catalogue: &Catalogue,
    vertex_by_stop_index: &[u32],
    routing_settings: RoutingSettings,
    speed: f64,
    graph: &mut Graph,
    edge_meta: &mut Vec<EdgeMeta>,
) {
    let stops = catalogue.stops();
    for i in 0..sequence.len() {
        let origin = sequence[i];
        let mut meters = 0u32;
        for j in (i + 1)..sequence.len() {
            if sequence[j] == origin {
                break;
            }
            meters += directional_distance(stops, sequence[j - 1], sequence[j]);
            let weight = routing_settings.bus_wait_time as f64 + meters as f64 / speed;
            let id = graph.add_edge(Edge {
                from: vertex_by_stop_index[origin as usize],
                to: vertex_by_stop_index[sequence[j] as usize],
                weight,
            });
            debug_assert_eq!(id as usize, edge_meta.len());
            edge_meta.push(EdgeMeta { bus_index, span_count: (j - i) as u32 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    fn sample_catalogue() -> Catalogue {
        let mut c = Catalogue::new();
        c.add_stop("A", Coordinate::new(0.0, 0.0));
        c.add_stop("B", Coordinate::new(0.0, 1.0));
        c.add_stop("C", Coordinate::new(0.0, 2.0));
        c.set_distance("A", "B", 1000);
        c.set_distance("B", "C", 2000);
        c.set_distance("C", "A", 3000);
        c
    }

    #[test]
    fn ring_bus_only_adds_forward_edges() {
        let mut c = sample_catalogue();
        c.add_bus("1", &["A", "B", "C", "A"], true);
        let settings = RoutingSettings { bus_wait_time: 5, bus_velocity: 60.0 };
        let (graph, meta) = build_route_graph(&c, settings);
        // speed = 1000 m/min, so weight = wait + meters/1000
        assert_eq!(graph.edge_count(), meta.edge_meta.len());
        assert!(graph.edge_count() >= 3);
    }

    #[test]
    fn linear_bus_adds_both_directions() {
        let mut c = sample_catalogue();
        c.add_bus("2", &["A", "B"], false);
        let settings = RoutingSettings { bus_wait_time: 5, bus_velocity: 60.0 };
        let (graph, _meta) = build_route_graph(&c, settings);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn isolated_stop_still_gets_a_vertex() {
        let mut c = sample_catalogue();
        c.add_stop("D", Coordinate::new(5.0, 5.0));
        let settings = RoutingSettings { bus_wait_time: 5, bus_velocity: 60.0 };
        let (graph, _meta) = build_route_graph(&c, settings);
        assert_eq!(graph.vertex_count(), 4);
    }
}
