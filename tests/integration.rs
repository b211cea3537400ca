use transport_catalogue::catalogue::Catalogue;
use transport_catalogue::geo::Coordinate;
use transport_catalogue::graph::build_route_graph;
use transport_catalogue::io::{self, StatRequestDto};
use transport_catalogue::persist::{self, PersistedState};
use transport_catalogue::query;
use transport_catalogue::render::{build_picture, color::Color, RenderSettings};
use transport_catalogue::router::RoutingSettings;

fn small_render_settings() -> RenderSettings {
    RenderSettings {
        width: 600.0,
        height: 400.0,
        padding: 50.0,
        line_width: 14.0,
        stop_radius: 5.0,
        bus_label_font_size: 20,
        bus_label_offset: (7.0, 15.0),
        stop_label_font_size: 18,
        stop_label_offset: (7.0, -3.0),
        underlayer_color: Color::Rgba { red: 255, green: 255, blue: 255, opacity: 0.85 },
        underlayer_width: 3.0,
        color_palette: vec![
            Color::Named("green".to_string()),
            Color::Rgb { red: 255, green: 160, blue: 0 },
            Color::Named("red".to_string()),
        ],
    }
}

/// Builds a small two-bus catalogue: a ring route and a linear route that
/// share one stop, mirroring the shape of the reference sample dataset.
fn sample_catalogue() -> Catalogue {
    let mut c = Catalogue::new();
    c.add_stop("Biryulyovo Zapadnoye", Coordinate::new(55.574371, 37.651700));
    c.add_stop("Biryusinka", Coordinate::new(55.581065, 37.648390));
    c.add_stop("Universam", Coordinate::new(55.587655, 37.645687));
    c.add_stop("Biryulyovo Tovarnaya", Coordinate::new(55.592028, 37.653656));
    c.add_stop("Biryulyovo Passazhirskaya", Coordinate::new(55.580999, 37.659164));
    c.add_stop("Rossoshanskaya ulitsa", Coordinate::new(55.595579, 37.605757));
    c.add_stop("Prazhskaya", Coordinate::new(55.611678, 37.603831));

    c.set_distance("Biryulyovo Zapadnoye", "Biryusinka", 1800);
    c.set_distance("Biryusinka", "Universam", 1700);
    c.set_distance("Universam", "Biryulyovo Tovarnaya", 2400);
    c.set_distance("Biryulyovo Tovarnaya", "Biryulyovo Zapadnoye", 1100);
    c.set_distance("Biryulyovo Zapadnoye", "Biryulyovo Passazhirskaya", 1200);
    c.set_distance("Biryulyovo Passazhirskaya", "Biryulyovo Zapadnoye", 1200);
    c.set_distance("Biryulyovo Passazhirskaya", "Biryulyovo Zapadnoye", 1200);
    c.set_distance("Rossoshanskaya ulitsa", "Prazhskaya", 9900);

    c.add_bus(
        "256",
        &[
            "Biryulyovo Zapadnoye",
            "Biryusinka",
            "Universam",
            "Biryulyovo Tovarnaya",
            "Biryulyovo Zapadnoye",
        ],
        true,
    );
    c.add_bus("750", &["Biryulyovo Zapadnoye", "Biryulyovo Passazhirskaya"], false);
    c.add_bus("751", &["Rossoshanskaya ulitsa", "Prazhskaya"], false);
    c.add_bus("empty", &[], false);

    c
}

#[test]
fn ring_bus_metrics_match_expectations() {
    let c = sample_catalogue();
    let bus = c.find_bus("256").unwrap();
    assert_eq!(bus.count_stops, 5);
    assert_eq!(bus.count_unique_stops, 4);
    assert_eq!(bus.length, 1800 + 1700 + 2400 + 1100);
    assert!(bus.curvature() >= 1.0);
}

#[test]
fn linear_bus_metrics_double_single_direction() {
    let c = sample_catalogue();
    let bus = c.find_bus("751").unwrap();
    assert_eq!(bus.count_stops, 3);
    assert_eq!(bus.count_unique_stops, 2);
    assert_eq!(bus.length, 9900 * 2);
}

#[test]
fn unknown_stop_and_bus_queries_report_not_found() {
    let c = sample_catalogue();
    assert!(c.find_stop("Nowhere").is_none());
    assert!(c.find_bus("404").is_none());
}

#[test]
fn empty_bus_is_absent_from_stat_queries() {
    let c = sample_catalogue();
    let bus = c.find_bus("empty").unwrap();
    assert!(bus.is_empty());
}

#[test]
fn stop_query_lists_buses_sorted_by_name() {
    let c = sample_catalogue();
    let stop = c.find_stop("Biryulyovo Zapadnoye").unwrap();
    let names: Vec<&str> = stop
        .bus_memberships
        .iter()
        .map(|&idx| &*c.buses()[idx as usize].name)
        .collect();
    assert_eq!(names, vec!["256", "750"]);
}

#[test]
fn full_pipeline_answers_stop_bus_map_and_route_requests() {
    let catalogue = sample_catalogue();
    let render_settings = small_render_settings();
    let routing_settings = RoutingSettings { bus_wait_time: 6, bus_velocity: 40.0 };

    let picture = build_picture(&catalogue, &render_settings);
    let (graph, router_meta) = build_route_graph(&catalogue, routing_settings);

    let requests = vec![
        StatRequestDto::Stop { id: 1, name: "Biryulyovo Zapadnoye".to_string() },
        StatRequestDto::Stop { id: 2, name: "Nowhere".to_string() },
        StatRequestDto::Bus { id: 3, name: "256".to_string() },
        StatRequestDto::Bus { id: 4, name: "empty".to_string() },
        StatRequestDto::Map { id: 5 },
        StatRequestDto::Route {
            id: 6,
            from: "Biryulyovo Zapadnoye".to_string(),
            to: "Universam".to_string(),
        },
        StatRequestDto::Route {
            id: 7,
            from: "Biryulyovo Zapadnoye".to_string(),
            to: "Prazhskaya".to_string(),
        },
    ];

    let responses = query::dispatch(&catalogue, &picture, &graph, &router_meta, &requests);

    assert_eq!(responses[0].buses.as_ref().unwrap(), &vec!["256".to_string(), "750".to_string()]);
    assert_eq!(responses[1].error_message.as_deref(), Some("not found"));
    assert!(responses[2].curvature.is_some());
    assert_eq!(responses[3].error_message.as_deref(), Some("not found"));
    let svg = responses[4].map.as_ref().unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<polyline"));

    let route = &responses[5];
    assert!(route.total_time.is_some());
    assert_eq!(route.items.as_ref().unwrap().len(), 2);

    // Two disjoint route components: no path crosses between them.
    assert_eq!(responses[6].error_message.as_deref(), Some("not found"));
}

#[test]
fn persisted_state_round_trips_and_still_answers_queries() {
    let catalogue = sample_catalogue();
    let render_settings = small_render_settings();
    let routing_settings = RoutingSettings { bus_wait_time: 6, bus_velocity: 40.0 };

    let picture = build_picture(&catalogue, &render_settings);
    let (graph, router_meta) = build_route_graph(&catalogue, routing_settings);

    let state = PersistedState { catalogue, picture, graph, router_meta };

    let path = std::env::temp_dir().join(format!(
        "transport_catalogue_integration_{}.bin",
        std::process::id()
    ));
    persist::save(&state, &path).expect("save should succeed");
    let loaded = persist::load(&path).expect("load should succeed");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.catalogue.stop_count(), state.catalogue.stop_count());
    assert_eq!(loaded.graph.edge_count(), state.graph.edge_count());

    let requests = vec![StatRequestDto::Bus { id: 1, name: "256".to_string() }];
    let responses = query::dispatch(&loaded.catalogue, &loaded.picture, &loaded.graph, &loaded.router_meta, &requests);
    assert!(responses[0].route_length.is_some());
}

#[test]
fn building_catalogue_from_json_input_matches_manual_construction() {
    let json = r#"[
        {
            "name": "Biryulyovo Zapadnoye",
            "type": "Stop",
            "latitude": 55.574371,
            "longitude": 37.651700,
            "road_distances": {"Biryusinka": 1800}
        },
        {
            "name": "Biryusinka",
            "type": "Stop",
            "latitude": 55.581065,
            "longitude": 37.648390
        }
    ]"#;
    let requests: Vec<io::BaseRequest> = serde_json::from_str(json).unwrap();
    let catalogue = io::build_catalogue(&requests);
    assert_eq!(catalogue.stop_count(), 2);
    assert_eq!(
        catalogue
            .find_stop("Biryulyovo Zapadnoye")
            .unwrap()
            .road_distances
            .get(&catalogue.index_of_stop("Biryusinka")),
        Some(&1800)
    );
}
