//! Arrow glyph rendering for 3D vector visualization.
//!
//! This module converts a vector anchored at a point into plotly primitives
//! representing an arrow: a straight shaft drawn as a line trace and a
//! cone-shaped head built from triangular mesh facets. Glyphs are consumed
//! immediately; only the emitted traces are retained by the caller.
//!
//! The glyph system provides:
//! - Degenerate-direction guarding for zero-amplitude field vectors
//! - A stable perpendicular basis for the cone regardless of orientation
//! - Legend and hover exclusion so glyphs stay purely decorative

use nalgebra::{Point3, Vector3};
use plotly::common::{HoverInfo, Line, Mode};
use plotly::{Mesh3D, Scatter3D, Trace};
use std::f64::consts::PI;

use crate::settings::{
    Settings, AXIS_ALIGNMENT_THRESHOLD, CONE_FACETS, DIR_MAGNITUDE_THRESHOLD,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings;

    #[test]
    fn emits_nine_primitives() {
        let settings = settings::load_default_config().unwrap();
        let mut traces: Vec<Box<dyn Trace>> = Vec::new();
        let glyph = Glyph::new(Point3::origin(), Vector3::new(0.3, 0.1, 0.0), "red");
        add_arrow(&mut traces, &settings, &glyph);
        assert_eq!(traces.len(), 1 + CONE_FACETS);
    }

    #[test]
    fn skips_degenerate_direction() {
        let settings = settings::load_default_config().unwrap();
        let mut traces: Vec<Box<dyn Trace>> = Vec::new();
        let glyph = Glyph::new(Point3::origin(), Vector3::zeros(), "red");
        add_arrow(&mut traces, &settings, &glyph);
        assert!(traces.is_empty());

        let tiny = Glyph::new(Point3::origin(), Vector3::new(1e-11, 0.0, 0.0), "red");
        add_arrow(&mut traces, &settings, &tiny);
        assert!(traces.is_empty());
    }

    #[test]
    fn axis_aligned_direction_has_valid_basis() {
        // The +z direction triggers the near-alignment branch of the
        // perpendicular heuristic and must still produce a full cone.
        let settings = settings::load_default_config().unwrap();
        let mut traces: Vec<Box<dyn Trace>> = Vec::new();
        let glyph = Glyph::new(Point3::origin(), Vector3::z(), "green");
        add_arrow(&mut traces, &settings, &glyph);
        assert_eq!(traces.len(), 1 + CONE_FACETS);
    }

    #[test]
    fn perpendicular_basis_is_orthonormal() {
        for dir in [
            Vector3::new(0.2, -0.4, 0.1).normalize(),
            Vector3::z(),
            Vector3::y(),
            Vector3::new(0.0, 0.0, -1.0),
        ] {
            let (p1, p2) = perpendicular_basis(&dir);
            assert!(p1.dot(&dir).abs() < 1e-12);
            assert!(p2.dot(&dir).abs() < 1e-12);
            assert!(p1.dot(&p2).abs() < 1e-12);
            assert!((p1.norm() - 1.0).abs() < 1e-12);
            assert!((p2.norm() - 1.0).abs() < 1e-12);
        }
    }
}

/// A vector to be drawn at a point, with its display color.
///
/// **Context**: Each sampled field value is visualized as an arrow anchored
/// at its sample position. The glyph is a transient value describing that
/// arrow; it holds no rendering state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub origin: Point3<f64>,
    pub dir: Vector3<f64>,
    pub color: &'static str,
}

impl Glyph {
    pub fn new(origin: Point3<f64>, dir: Vector3<f64>, color: &'static str) -> Self {
        Self { origin, dir, color }
    }
}

/// Appends the traces of one arrow glyph to `traces`.
///
/// **Context**: A field vector of momentarily zero amplitude has no defined
/// direction, so glyphs below [`DIR_MAGNITUDE_THRESHOLD`] are silently
/// skipped rather than reported as errors.
///
/// **How it Works**: Normalizes the direction, draws the shaft line up to
/// the base of the head, then places [`CONE_FACETS`] points on a circle
/// around the shaft end and emits one opaque triangular facet per pair of
/// adjacent base points, all meeting at the apex.
pub fn add_arrow(traces: &mut Vec<Box<dyn Trace>>, settings: &Settings, glyph: &Glyph) {
    let norm = glyph.dir.norm();
    if norm < DIR_MAGNITUDE_THRESHOLD {
        return;
    }

    let dir = glyph.dir / norm;

    let shaft_end = glyph.origin + dir * (settings.arrow_length - settings.head_length);
    let shaft = Scatter3D::new(
        vec![glyph.origin.x, shaft_end.x],
        vec![glyph.origin.y, shaft_end.y],
        vec![glyph.origin.z, shaft_end.z],
    )
    .mode(Mode::Lines)
    .line(Line::new().color(glyph.color).width(settings.shaft_width))
    .show_legend(false)
    .hover_info(HoverInfo::Skip);
    traces.push(shaft);

    let apex = glyph.origin + dir * settings.arrow_length;
    let (perp1, perp2) = perpendicular_basis(&dir);

    // Cone base circle around the shaft end, endpoint excluded.
    let base: Vec<Point3<f64>> = (0..CONE_FACETS)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / CONE_FACETS as f64;
            shaft_end + settings.head_width * (perp1 * theta.cos() + perp2 * theta.sin())
        })
        .collect();

    for i in 0..CONE_FACETS {
        let a = base[i];
        let b = base[(i + 1) % CONE_FACETS];
        let facet = Mesh3D::new(
            vec![apex.x, a.x, b.x],
            vec![apex.y, a.y, b.y],
            vec![apex.z, a.z, b.z],
            Some(vec![0]),
            Some(vec![1]),
            Some(vec![2]),
        )
        .color(glyph.color)
        .opacity(1.0)
        .show_legend(false)
        .hover_info(HoverInfo::Skip);
        traces.push(facet);
    }
}

/// Returns two unit vectors perpendicular to the unit direction `dir`.
///
/// When `dir` is nearly aligned with the propagation axis the cross product
/// against the axis degenerates, so the first perpendicular is seeded from a
/// different component pair in that case.
fn perpendicular_basis(dir: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let seed = if dir.z.abs() > AXIS_ALIGNMENT_THRESHOLD {
        Vector3::new(-dir.y, dir.x, 0.0)
    } else {
        Vector3::new(0.0, -dir.z, dir.y)
    };

    let perp1 = seed
        .try_normalize(DIR_MAGNITUDE_THRESHOLD)
        .unwrap_or_else(Vector3::x);
    let perp2 = dir.cross(&perp1);

    (perp1, perp2)
}
