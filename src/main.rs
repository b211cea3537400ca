use std::io::Read;
use std::path::Path;

use transport_catalogue::error::Error;
use transport_catalogue::io::InputDocument;
use transport_catalogue::{graph, io, persist, query, render, Result};

fn print_usage() {
    eprintln!("Usage: transport_catalogue [make_base|process_requests]");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        print_usage();
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = match args[1].as_str() {
        "make_base" => make_base(),
        "process_requests" => process_requests(),
        _ => {
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        tracing::error!(%err, "run failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn read_input_document() -> Result<InputDocument> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(Error::ReadInput)?;
    serde_json::from_str(&raw).map_err(Error::ParseInput)
}

fn make_base() -> Result<()> {
    let document = read_input_document()?;

    let started = std::time::Instant::now();
    let catalogue = io::build_catalogue(&document.base_requests);
    tracing::info!(
        stops = catalogue.stop_count(),
        buses = catalogue.buses().len(),
        elapsed_ms = started.elapsed().as_millis(),
        "built catalogue"
    );

    let render_settings: render::RenderSettings = document.render_settings.into();
    let routing_settings: transport_catalogue::router::RoutingSettings = document.routing_settings.into();

    let started = std::time::Instant::now();
    let picture = render::build_picture(&catalogue, &render_settings);
    tracing::debug!(elapsed_ms = started.elapsed().as_millis(), "built picture");

    let started = std::time::Instant::now();
    let (graph, router_meta) = graph::build_route_graph(&catalogue, routing_settings);
    tracing::debug!(
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_millis(),
        "built route graph"
    );

    let state = persist::PersistedState { catalogue, picture, graph, router_meta };
    let path = Path::new(&document.serialization_settings.file);
    persist::save(&state, path)?;
    tracing::info!(file = %path.display(), "persisted state");

    Ok(())
}

fn process_requests() -> Result<()> {
    let document = read_input_document()?;

    let path = Path::new(&document.serialization_settings.file);
    let state = persist::load(path)?;
    tracing::info!(file = %path.display(), "loaded persisted state");

    let started = std::time::Instant::now();
    let responses = query::dispatch(
        &state.catalogue,
        &state.picture,
        &state.graph,
        &state.router_meta,
        &document.stat_requests,
    );
    tracing::debug!(
        requests = responses.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "answered stat requests"
    );

    let stdout = std::io::stdout();
    serde_json::to_writer(stdout.lock(), &responses).map_err(Error::WriteOutput)?;

    Ok(())
}
