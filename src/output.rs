//! Report rendering for a computed layout.

use anyhow::Result;
use clap::ValueEnum;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Write;

use crate::geometry::{LogoInputs, LogoLayout, Projections};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `LABEL: x y` lines
    #[default]
    Text,
    /// A TOML document with input, lengths and points tables
    Toml,
}

/// How a layout is printed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Fixed number of decimals; shortest round-trip form when unset
    pub precision: Option<usize>,
    /// Include the rh/rw projections before the points
    pub show_lengths: bool,
}

pub fn render(layout: &LogoLayout, options: &ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(render_text(layout, options)),
        OutputFormat::Toml => render_toml(layout, options.show_lengths),
    }
}

fn render_text(layout: &LogoLayout, options: &ReportOptions) -> String {
    let num = |v: f64| format_number(v, options.precision);
    let mut out = String::new();

    if options.show_lengths {
        for (label, value) in layout.lengths.entries() {
            let _ = writeln!(out, "{}: {}", label, num(value));
        }
        out.push('\n');
    }

    for (label, point) in layout.points() {
        let _ = writeln!(out, "{}: {} {}", label, num(point.x), num(point.y));
    }
    out
}

/// Debug formatting keeps the decimal point on whole numbers (`400.0`)
fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{:?}", value),
    }
}

#[derive(Serialize)]
struct TomlReport<'a> {
    input: &'a LogoInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    lengths: Option<&'a Projections>,
    points: LabelledPoints<'a>,
}

/// Serializes as a map so the labels keep their chain order
struct LabelledPoints<'a>(&'a LogoLayout);

impl Serialize for LabelledPoints<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let points = self.0.points();
        let mut map = serializer.serialize_map(Some(points.len()))?;
        for (label, point) in points {
            map.serialize_entry(label, &point)?;
        }
        map.end()
    }
}

fn render_toml(layout: &LogoLayout, show_lengths: bool) -> Result<String> {
    let report = TomlReport {
        input: &layout.input,
        lengths: show_lengths.then_some(&layout.lengths),
        points: LabelledPoints(layout),
    };
    Ok(toml::to_string(&report)?)
}
