//! Closed-form plane-wave field sampling.
//!
//! Instantaneous electric-field, magnetic-field, and energy-flux vectors are
//! evaluated at positions along the propagation axis, together with the
//! helical loci traced by the field tips as phase advances. The field vector
//! rotates in the transverse plane with constant magnitude; this stylized
//! model keeps both helices at full radius along the whole axis.

use nalgebra::Vector3;
use ndarray::Array1;

use crate::settings::Settings;


/// Instantaneous field vectors at one position on the propagation axis.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSample {
    /// Electric-field vector, rotating in the transverse plane.
    pub e: Vector3<f64>,
    /// Magnetic-field vector, 90 degrees ahead of the electric field.
    pub b: Vector3<f64>,
    /// Energy-flux indicator, fixed length along the propagation axis.
    pub s: Vector3<f64>,
}

impl FieldSample {
    pub fn at(settings: &Settings, z: f64) -> Self {
        let phi = phase(settings, z);
        let amplitude = settings.field_amplitude();

        Self {
            e: Vector3::new(amplitude * phi.cos(), amplitude * phi.sin(), 0.0),
            b: Vector3::new(-amplitude * phi.sin(), amplitude * phi.cos(), 0.0),
            s: Vector3::new(0.0, 0.0, settings.arrow_length),
        }
    }
}

/// Phase of the wave at position `z`, `wavenumber * z`.
pub fn phase(settings: &Settings, z: f64) -> f64 {
    settings.wavenumber() * z
}

/// Coarse sample positions at which arrow glyphs are drawn.
pub fn glyph_positions(settings: &Settings) -> Array1<f64> {
    Array1::linspace(0.0, settings.axis_extent, settings.num_glyph_samples)
}

/// A densely sampled tip-trajectory curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Helix {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// Locus of the rotating electric-field tip, `(cos phi, sin phi, z)`.
pub fn electric_helix(settings: &Settings) -> Helix {
    helix(settings, |phi| (phi.cos(), phi.sin()))
}

/// Locus of the magnetic-field tip, `(-sin phi, cos phi, z)`.
pub fn magnetic_helix(settings: &Settings) -> Helix {
    helix(settings, |phi| (-phi.sin(), phi.cos()))
}

fn helix(settings: &Settings, tip: impl Fn(f64) -> (f64, f64)) -> Helix {
    let z_fine = Array1::linspace(0.0, settings.axis_extent, settings.num_helix_samples);

    let mut x = Vec::with_capacity(z_fine.len());
    let mut y = Vec::with_capacity(z_fine.len());
    for &z in z_fine.iter() {
        let (tip_x, tip_y) = tip(phase(settings, z));
        x.push(tip_x);
        y.push(tip_y);
    }

    Helix {
        x,
        y,
        z: z_fine.to_vec(),
    }
}
