//! The JSON request/response shapes crossing the process boundary, and
//! their conversion into the crate's internal types. Kept separate from
//! `catalogue`/`render`/`router` so those stay free of any knowledge of the
//! wire format — a pure mapping layer, the way the reference stack's `dto`
//! module sits between its axum handlers and domain types.

mod color_dto;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use color_dto::ColorDto;

use crate::catalogue::Catalogue;
use crate::render::RenderSettings;
use crate::router::RoutingSettings;

/// Builds a catalogue from the input's `base_requests`, in the two passes
/// the stop/distance data requires: every stop must exist before any
/// `road_distances` entry naming it (possibly out of order) can be
/// resolved, and every stop must exist before any bus names it.
pub fn build_catalogue(base_requests: &[BaseRequest]) -> Catalogue {
    let mut catalogue = Catalogue::new();

    for request in base_requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = request {
            catalogue.add_stop(name, crate::geo::Coordinate::new(*latitude, *longitude));
        }
    }

    for request in base_requests {
        if let BaseRequest::Stop { name, road_distances, .. } = request {
            for (target, meters) in road_distances {
                catalogue.set_distance(name, target, *meters);
            }
        }
    }

    for request in base_requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = request {
            let stop_refs: Vec<&str> = stops.iter().map(String::as_str).collect();
            catalogue.add_bus(name, &stop_refs, *is_roundtrip);
        }
    }

    catalogue
}

#[derive(Debug, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    pub render_settings: RenderSettingsDto,
    pub routing_settings: RoutingSettingsDto,
    #[serde(default)]
    pub stat_requests: Vec<StatRequestDto>,
    pub serialization_settings: SerializationSettings,
}

#[derive(Debug, Deserialize)]
pub struct SerializationSettings {
    pub file: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: HashMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Deserialize)]
pub struct RoutingSettingsDto {
    pub bus_wait_time: u32,
    pub bus_velocity: f64,
}

impl From<RoutingSettingsDto> for RoutingSettings {
    fn from(dto: RoutingSettingsDto) -> Self {
        RoutingSettings { bus_wait_time: dto.bus_wait_time, bus_velocity: dto.bus_velocity }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderSettingsDto {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: (f64, f64),
    pub stop_label_font_size: u32,
    pub stop_label_offset: (f64, f64),
    pub underlayer_color: ColorDto,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorDto>,
}

impl From<RenderSettingsDto> for RenderSettings {
    fn from(dto: RenderSettingsDto) -> Self {
        RenderSettings {
            width: dto.width,
            height: dto.height,
            padding: dto.padding,
            line_width: dto.line_width,
            stop_radius: dto.stop_radius,
            bus_label_font_size: dto.bus_label_font_size,
            bus_label_offset: dto.bus_label_offset,
            stop_label_font_size: dto.stop_label_font_size,
            stop_label_offset: dto.stop_label_offset,
            underlayer_color: dto.underlayer_color.into(),
            underlayer_width: dto.underlayer_width,
            color_palette: dto.color_palette.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequestDto {
    Stop { id: u64, name: String },
    Bus { id: u64, name: String },
    Map { id: u64 },
    Route { id: u64, from: String, to: String },
}

#[derive(Debug, Serialize, Default)]
pub struct StatResponseDto {
    pub request_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curvature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_stop_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RouteItemDto>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemDto {
    Wait { stop_name: String, time: u32 },
    Bus { bus: String, span_count: u32, time: f64 },
}
