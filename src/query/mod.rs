//! Maps stat requests onto catalogue/picture/router lookups and composes
//! the JSON-facing response objects.

use crate::catalogue::Catalogue;
use crate::graph::Graph;
use crate::io::{RouteItemDto, StatRequestDto, StatResponseDto};
use crate::render::Picture;
use crate::router::{Router, RouterMeta};

fn not_found(id: u64) -> StatResponseDto {
    StatResponseDto {
        request_id: id,
        error_message: Some("not found".to_string()),
        ..Default::default()
    }
}

pub fn dispatch(
    catalogue: &Catalogue,
    picture: &Picture,
    graph: &Graph,
    meta: &RouterMeta,
    requests: &[StatRequestDto],
) -> Vec<StatResponseDto> {
    let router = Router::build(graph, meta);
    requests
        .iter()
        .map(|request| dispatch_one(catalogue, picture, meta, &router, request))
        .collect()
}

fn dispatch_one(
    catalogue: &Catalogue,
    picture: &Picture,
    meta: &RouterMeta,
    router: &Router<'_>,
    request: &StatRequestDto,
) -> StatResponseDto {
    match request {
        StatRequestDto::Stop { id, name } => match catalogue.find_stop(name) {
            None => not_found(*id),
            Some(stop) => {
                let buses = stop
                    .bus_memberships
                    .iter()
                    .map(|&idx| catalogue.buses()[idx as usize].name.to_string())
                    .collect();
                StatResponseDto { request_id: *id, buses: Some(buses), ..Default::default() }
            }
        },
        StatRequestDto::Bus { id, name } => match catalogue.find_bus(name) {
            Some(bus) if !bus.is_empty() => StatResponseDto {
                request_id: *id,
                curvature: Some(bus.curvature()),
                route_length: Some(bus.length as f64),
                stop_count: Some(bus.count_stops),
                unique_stop_count: Some(bus.count_unique_stops),
                ..Default::default()
            },
            _ => not_found(*id),
        },
        StatRequestDto::Map { id } => StatResponseDto {
            request_id: *id,
            map: Some(picture.to_svg()),
            ..Default::default()
        },
        StatRequestDto::Route { id, from, to } => {
            if catalogue.find_stop(from).is_none() || catalogue.find_stop(to).is_none() {
                return not_found(*id);
            }
            let from_vertex = meta.vertex_of_stop(catalogue.index_of_stop(from));
            let to_vertex = meta.vertex_of_stop(catalogue.index_of_stop(to));
            match router.build_route(from_vertex, to_vertex) {
                None => not_found(*id),
                Some(route) => {
                    let mut items = Vec::with_capacity(route.segments.len() * 2);
                    for segment in &route.segments {
                        let bus = &catalogue.buses()[segment.bus_index as usize];
                        let boarding_stop = &catalogue.stops()[meta.stop_of_vertex(segment.boarding_vertex) as usize];
                        items.push(RouteItemDto::Wait {
                            stop_name: boarding_stop.name.to_string(),
                            time: segment.wait_time,
                        });
                        items.push(RouteItemDto::Bus {
                            bus: bus.name.to_string(),
                            span_count: segment.span_count,
                            time: segment.ride_time,
                        });
                    }
                    StatResponseDto {
                        request_id: *id,
                        total_time: Some(route.total_time),
                        items: Some(items),
                        ..Default::default()
                    }
                }
            }
        }
    }
}
