//! Binary persistence of the fully built state: catalogue, picture, graph,
//! and router metadata, the same four components the reference
//! implementation's `serialization.cpp` bundles into one file. The
//! router's all-pairs table is deliberately excluded — it is recomputed
//! from the persisted graph on load.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::render::Picture;
use crate::router::RouterMeta;

#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub catalogue: Catalogue,
    pub picture: Picture,
    pub graph: Graph,
    pub router_meta: RouterMeta,
}

pub fn save(state: &PersistedState, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::WriteState { path: path.to_path_buf(), source })?;
    let writer = BufWriter::new(file);
    bincode::serialize_into(writer, state).map_err(Error::EncodeState)
}

pub fn load(path: &Path) -> Result<PersistedState> {
    let file = File::open(path).map_err(|source| Error::OpenState { path: path.to_path_buf(), source })?;
    let reader = BufReader::new(file);
    bincode::deserialize_from(reader).map_err(Error::DecodeState)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::render::{color::Color, settings::RenderSettings};
    use crate::router::RoutingSettings;

    #[test]
    fn round_trips_through_a_temp_file() {
        let mut catalogue = Catalogue::new();
        catalogue.add_stop("A", Coordinate::new(1.0, 2.0));
        catalogue.add_stop("B", Coordinate::new(3.0, 4.0));
        catalogue.set_distance("A", "B", 500);
        catalogue.add_bus("1", &["A", "B"], false);

        let settings = RenderSettings {
            width: 100.0,
            height: 100.0,
            padding: 10.0,
            line_width: 2.0,
            stop_radius: 3.0,
            bus_label_font_size: 12,
            bus_label_offset: (1.0, 1.0),
            stop_label_font_size: 10,
            stop_label_offset: (1.0, 1.0),
            underlayer_color: Color::Named("white".to_string()),
            underlayer_width: 3.0,
            color_palette: vec![Color::Named("green".to_string())],
        };
        let picture = crate::render::build_picture(&catalogue, &settings);
        let routing_settings = RoutingSettings { bus_wait_time: 5, bus_velocity: 40.0 };
        let (graph, router_meta) = crate::graph::build_route_graph(&catalogue, routing_settings);

        let state = PersistedState { catalogue, picture, graph, router_meta };

        let dir = std::env::temp_dir();
        let path = dir.join(format!("transport_catalogue_test_{}.bin", std::process::id()));
        save(&state, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.catalogue.stop_count(), state.catalogue.stop_count());
        assert_eq!(loaded.graph.edge_count(), state.graph.edge_count());
    }
}
