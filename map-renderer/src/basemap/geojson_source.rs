//! Reads basemap shapes from a GeoJSON file (FeatureCollection, Feature or bare Geometry).

use std::fs;
use std::path::Path;

use geojson::{GeoJson, Geometry, Value};
use tracing::debug;

use super::{LonLat, Shape};
use crate::error::{RenderError, Result};

pub(super) fn read_shapes(path: &Path) -> Result<Vec<Shape>> {
    let text = fs::read_to_string(path)?;
    let gj: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| RenderError::Basemap(format!("{}: {}", path.display(), e)))?;

    let mut shapes = Vec::new();
    match gj {
        GeoJson::FeatureCollection(fc) => {
            for feature in fc.features {
                let Some(geometry) = feature.geometry.as_ref() else {
                    debug!("feature without geometry, skip");
                    continue;
                };
                collect(geometry, &mut shapes);
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geometry) = feature.geometry.as_ref() {
                collect(geometry, &mut shapes);
            }
        }
        GeoJson::Geometry(geometry) => collect(&geometry, &mut shapes),
    }
    Ok(shapes)
}

fn collect(geometry: &Geometry, out: &mut Vec<Shape>) {
    match &geometry.value {
        Value::Polygon(rings) => out.push(polygon(rings)),
        Value::MultiPolygon(polygons) => out.extend(polygons.iter().map(|rings| polygon(rings))),
        Value::LineString(line) => out.push(Shape::Line(positions(line))),
        Value::MultiLineString(lines) => {
            out.extend(lines.iter().map(|line| Shape::Line(positions(line))))
        }
        Value::GeometryCollection(members) => {
            for member in members {
                collect(member, out);
            }
        }
        Value::Point(_) | Value::MultiPoint(_) => debug!("point geometry ignored in basemap"),
    }
}

fn polygon(rings: &[Vec<Vec<f64>>]) -> Shape {
    Shape::Polygon(rings.iter().map(|ring| positions(ring)).collect())
}

fn positions(coords: &[Vec<f64>]) -> Vec<LonLat> {
    coords
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| (p[0], p[1]))
        .collect()
}
