//! A small hand-rolled SVG writer.
//!
//! There is no retrieved crate in this corpus for SVG generation, and the
//! output format here is a handful of fixed element shapes with exact
//! attribute ordering, so this stays a direct writer rather than reaching
//! for a templating dependency.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Round,
}

impl StrokeLineCap {
    fn as_str(self) -> &'static str {
        match self {
            StrokeLineCap::Round => "round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Round,
}

impl StrokeLineJoin {
    fn as_str(self) -> &'static str {
        match self {
            StrokeLineJoin::Round => "round",
        }
    }
}

/// Shared stroke/fill attributes, written in the fixed order the reference
/// renderer uses: fill, stroke, stroke-width, stroke-linecap, stroke-linejoin.
#[derive(Debug, Clone, Default)]
pub struct PathProps {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub stroke_linecap: Option<StrokeLineCap>,
    pub stroke_linejoin: Option<StrokeLineJoin>,
}

impl PathProps {
    fn render_attrs(&self, out: &mut String) {
        if let Some(fill) = &self.fill {
            let _ = write!(out, " fill=\"{fill}\"");
        }
        if let Some(stroke) = &self.stroke {
            let _ = write!(out, " stroke=\"{stroke}\"");
        }
        if let Some(width) = self.stroke_width {
            let _ = write!(out, " stroke-width=\"{width}\"");
        }
        if let Some(cap) = self.stroke_linecap {
            let _ = write!(out, " stroke-linecap=\"{}\"", cap.as_str());
        }
        if let Some(join) = self.stroke_linejoin {
            let _ = write!(out, " stroke-linejoin=\"{}\"", join.as_str());
        }
    }
}

#[derive(Debug, Clone)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub props: PathProps,
}

#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub props: PathProps,
}

#[derive(Debug, Clone)]
pub struct Text {
    pub pos: Point,
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data: String,
    pub props: PathProps,
}

/// One renderable SVG element. Corresponds to the reference renderer's
/// `svg::Object` hierarchy, flattened into an enum since this writer has no
/// other element kinds to extend with.
#[derive(Debug, Clone)]
pub enum Element {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

fn escape_xml_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

impl Element {
    fn render(&self, out: &mut String) {
        out.push_str("  ");
        match self {
            Element::Circle(c) => {
                let _ = write!(out, "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"", c.center.x, c.center.y, c.radius);
                c.props.render_attrs(out);
                out.push_str("/>");
            }
            Element::Polyline(p) => {
                out.push_str("<polyline points=\"");
                for (i, point) in p.points.iter().enumerate() {
                    if i != 0 {
                        out.push(' ');
                    }
                    let _ = write!(out, "{},{}", point.x, point.y);
                }
                out.push('"');
                p.props.render_attrs(out);
                out.push_str("/>");
            }
            Element::Text(t) => {
                out.push_str("<text");
                t.props.render_attrs(out);
                let _ = write!(
                    out,
                    " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
                    t.pos.x, t.pos.y, t.offset.x, t.offset.y, t.font_size
                );
                if let Some(family) = &t.font_family {
                    let _ = write!(out, " font-family=\"{family}\"");
                }
                if let Some(weight) = &t.font_weight {
                    let _ = write!(out, " font-weight=\"{weight}\"");
                }
                let _ = write!(out, ">{}</text>", escape_xml_text(&t.data));
            }
        }
        out.push('\n');
    }
}

/// An ordered collection of elements, rendered as one complete SVG document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
        out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n");
        for element in &self.elements {
            element.render(&mut out);
        }
        out.push_str("</svg>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_ampersand_and_angle_brackets() {
        assert_eq!(escape_xml_text("A & B <C>"), "A &amp; B &lt;C&gt;");
    }

    #[test]
    fn renders_circle_with_attrs() {
        let mut doc = Document::new();
        doc.add(Element::Circle(Circle {
            center: Point::new(1.0, 2.0),
            radius: 3.0,
            props: PathProps {
                fill: Some(Color::Named("white".into())),
                ..Default::default()
            },
        }));
        let rendered = doc.render();
        assert!(rendered.contains("<circle cx=\"1\" cy=\"2\" r=\"3\" fill=\"white\"/>"));
        assert!(rendered.starts_with("<?xml"));
        assert!(rendered.ends_with("</svg>"));
    }
}
