//! Composes the catalogue into a layered picture and serializes it as SVG.
//!
//! `Drawable` is a tagged enum, not a trait-object hierarchy: the reference
//! renderer's `svg::Drawable` is a virtual base class, but everything this
//! crate ever draws is one of four fixed shapes, and a closed enum keeps the
//! whole picture `Serialize`/`Deserialize` without a vtable or an
//! `erased_serde`-style workaround.

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::render::color::Color;
use crate::render::projector::Projector;
use crate::render::settings::RenderSettings;
use crate::render::svg::{Circle, Document, Element, Point, Polyline, PathProps, StrokeLineCap, StrokeLineJoin, Text};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Drawable {
    RoutePolyline {
        points: Vec<Point>,
        color: Color,
        line_width: f64,
    },
    RouteLabel {
        position: Point,
        offset: (f64, f64),
        font_size: u32,
        color: Color,
        underlayer_color: Color,
        underlayer_width: f64,
        text: String,
    },
    StopDisk {
        position: Point,
        radius: f64,
    },
    StopLabel {
        position: Point,
        offset: (f64, f64),
        font_size: u32,
        underlayer_color: Color,
        underlayer_width: f64,
        text: String,
    },
}

impl Drawable {
    fn push_elements(&self, out: &mut Vec<Element>) {
        match self {
            Drawable::RoutePolyline { points, color, line_width } => {
                out.push(Element::Polyline(Polyline {
                    points: points.clone(),
                    props: PathProps {
                        fill: Some(Color::None),
                        stroke: Some(color.clone()),
                        stroke_width: Some(*line_width),
                        stroke_linecap: Some(StrokeLineCap::Round),
                        stroke_linejoin: Some(StrokeLineJoin::Round),
                    },
                }));
            }
            Drawable::RouteLabel { position, offset, font_size, color, underlayer_color, underlayer_width, text } => {
                let base = Text {
                    pos: *position,
                    offset: Point::new(offset.0, offset.1),
                    font_size: *font_size,
                    font_family: Some("Verdana".to_string()),
                    font_weight: Some("bold".to_string()),
                    data: text.clone(),
                    props: PathProps::default(),
                };
                out.push(Element::Text(Text {
                    props: PathProps {
                        fill: Some(underlayer_color.clone()),
                        stroke: Some(underlayer_color.clone()),
                        stroke_width: Some(*underlayer_width),
                        stroke_linecap: Some(StrokeLineCap::Round),
                        stroke_linejoin: Some(StrokeLineJoin::Round),
                    },
                    ..base.clone()
                }));
                out.push(Element::Text(Text {
                    props: PathProps {
                        fill: Some(color.clone()),
                        ..Default::default()
                    },
                    ..base
                }));
            }
            Drawable::StopDisk { position, radius } => {
                out.push(Element::Circle(Circle {
                    center: *position,
                    radius: *radius,
                    props: PathProps {
                        fill: Some(Color::Named("white".to_string())),
                        ..Default::default()
                    },
                }));
            }
            Drawable::StopLabel { position, offset, font_size, underlayer_color, underlayer_width, text } => {
                let base = Text {
                    pos: *position,
                    offset: Point::new(offset.0, offset.1),
                    font_size: *font_size,
                    font_family: Some("Verdana".to_string()),
                    font_weight: None,
                    data: text.clone(),
                    props: PathProps::default(),
                };
                out.push(Element::Text(Text {
                    props: PathProps {
                        fill: Some(underlayer_color.clone()),
                        stroke: Some(underlayer_color.clone()),
                        stroke_width: Some(*underlayer_width),
                        stroke_linecap: Some(StrokeLineCap::Round),
                        stroke_linejoin: Some(StrokeLineJoin::Round),
                    },
                    ..base.clone()
                }));
                out.push(Element::Text(Text {
                    props: PathProps {
                        fill: Some(Color::Named("black".to_string())),
                        ..Default::default()
                    },
                    ..base
                }));
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Picture {
    drawables: Vec<Drawable>,
}

impl Picture {
    pub fn to_svg(&self) -> String {
        let mut doc = Document::new();
        let mut elements = Vec::new();
        for drawable in &self.drawables {
            drawable.push_elements(&mut elements);
        }
        for element in elements {
            doc.add(element);
        }
        doc.render()
    }
}

/// Builds the layered picture for every bus/stop that participates in at
/// least one non-empty route, in the fixed draw order: route polylines,
/// route labels, stop disks, stop labels — each group in lexicographic name
/// order.
pub fn build_picture(catalogue: &Catalogue, settings: &RenderSettings) -> Picture {
    let mut buses: Vec<_> = catalogue
        .buses()
        .iter()
        .filter(|b| !b.is_empty())
        .collect();
    buses.sort_by(|a, b| a.name.cmp(&b.name));

    let served_stop_indices: std::collections::BTreeSet<u32> =
        buses.iter().flat_map(|b| b.stops.iter().copied()).collect();

    let projector = Projector::new(
        served_stop_indices
            .iter()
            .map(|&idx| catalogue.stops()[idx as usize].coord),
        settings.width,
        settings.height,
        settings.padding,
    );

    let mut drawables = Vec::new();

    for (ordinal, bus) in buses.iter().enumerate() {
        let color = settings.color_palette[ordinal % settings.color_palette.len()].clone();
        let mut sequence = bus.stops.clone();
        if !bus.ring && sequence.len() > 1 {
            let mut back = sequence[..sequence.len() - 1].to_vec();
            back.reverse();
            sequence.extend(back);
        }
        let points: Vec<Point> = sequence
            .iter()
            .map(|&idx| projector.project(&catalogue.stops()[idx as usize].coord))
            .collect();
        drawables.push(Drawable::RoutePolyline {
            points,
            color,
            line_width: settings.line_width,
        });
    }

    for (ordinal, bus) in buses.iter().enumerate() {
        let color = settings.color_palette[ordinal % settings.color_palette.len()].clone();
        let mut endpoints = vec![bus.stops[0]];
        if !bus.ring {
            let last = *bus.stops.last().unwrap();
            if last != bus.stops[0] {
                endpoints.push(last);
            }
        }
        for stop_idx in endpoints {
            let position = projector.project(&catalogue.stops()[stop_idx as usize].coord);
            drawables.push(Drawable::RouteLabel {
                position,
                offset: settings.bus_label_offset,
                font_size: settings.bus_label_font_size,
                color: color.clone(),
                underlayer_color: settings.underlayer_color.clone(),
                underlayer_width: settings.underlayer_width,
                text: bus.name.to_string(),
            });
        }
    }

    let mut served_stop_names: Vec<(&str, u32)> = served_stop_indices
        .iter()
        .map(|&idx| (catalogue.stops()[idx as usize].name.as_ref(), idx))
        .collect();
    served_stop_names.sort_by(|a, b| a.0.cmp(b.0));

    for &(_, stop_idx) in &served_stop_names {
        let position = projector.project(&catalogue.stops()[stop_idx as usize].coord);
        drawables.push(Drawable::StopDisk {
            position,
            radius: settings.stop_radius,
        });
    }

    for (name, stop_idx) in served_stop_names {
        let position = projector.project(&catalogue.stops()[stop_idx as usize].coord);
        drawables.push(Drawable::StopLabel {
            position,
            offset: settings.stop_label_offset,
            font_size: settings.stop_label_font_size,
            underlayer_color: settings.underlayer_color.clone(),
            underlayer_width: settings.underlayer_width,
            text: name.to_string(),
        });
    }

    Picture { drawables }
}
