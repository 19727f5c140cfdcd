use anyhow::Result;
use clap::Parser;
use std::f64::consts::PI;
use std::fmt;

/// Minimum direction-vector magnitude for an arrow glyph to be drawn.
pub const DIR_MAGNITUDE_THRESHOLD: f64 = 1e-10;
/// Minimum |z| component of a unit direction to be treated as near-axis-aligned
/// when choosing a perpendicular basis for the arrowhead.
pub const AXIS_ALIGNMENT_THRESHOLD: f64 = 0.9;
/// Number of triangular facets forming each cone-shaped arrowhead.
pub const CONE_FACETS: usize = 8;
/// Field amplitude as a fraction of the full arrow length.
pub const FIELD_AMPLITUDE_FAC: f64 = 0.55;
/// Stroke width of the helix trajectory curves.
pub const HELIX_WIDTH: f64 = 1.0;

/// Display color of the electric field and its helix.
pub const E_COLOR: &str = "red";
/// Display color of the magnetic field and its helix.
pub const B_COLOR: &str = "blue";
/// Display color of the Poynting vector indicator.
pub const S_COLOR: &str = "green";

/// Runtime configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub wavelength: f64,
    pub axis_extent: f64,
    pub num_glyph_samples: usize,
    pub num_helix_samples: usize,
    pub arrow_length: f64,
    pub head_length: f64,
    pub head_width: f64,
    pub shaft_width: f64,
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wavelength: 1.0,
            axis_extent: 6.0,
            num_glyph_samples: 12,
            num_helix_samples: 480,
            arrow_length: 0.5,
            head_length: 0.1,
            head_width: 0.05,
            shaft_width: 6.0,
            output: "em_wave_analysis.html".to_string(),
        }
    }
}

impl Settings {
    /// Spatial frequency of the wave, `2 pi / wavelength`.
    pub fn wavenumber(&self) -> f64 {
        2.0 * PI / self.wavelength
    }

    /// Transverse field amplitude applied to both the electric and
    /// magnetic glyphs.
    pub fn field_amplitude(&self) -> f64 {
        self.arrow_length * FIELD_AMPLITUDE_FAC
    }
}

/// Default configuration without any command-line overrides.
pub fn load_default_config() -> Result<Settings> {
    let config = Settings::default();
    validate_config(&config);

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let mut config = Settings::default();

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(wavelength) = args.w {
        config.wavelength = wavelength;
    }
    if let Some(extent) = args.extent {
        config.axis_extent = extent;
    }
    if let Some(glyphs) = args.glyphs {
        config.num_glyph_samples = glyphs;
    }
    if let Some(helix) = args.helix {
        config.num_helix_samples = helix;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    validate_config(&config);

    Ok(config)
}

fn validate_config(config: &Settings) {
    assert!(config.wavelength > 0.0, "Wavelength must be greater than 0");
    assert!(
        config.num_glyph_samples > 1,
        "At least two glyph sample positions are required"
    );
    assert!(
        config.num_helix_samples > 1,
        "At least two helix sample positions are required"
    );
    assert!(
        config.arrow_length > config.head_length,
        "Arrow length must exceed the head length"
    );
}

#[derive(Parser, Debug)]
#[command(version, about = "emwave - electromagnetic plane wave structure visualizer")]
pub struct CliArgs {
    /// Wavelength in units of the propagation axis.
    #[arg(short, long)]
    w: Option<f64>,

    /// Extent of the propagation axis. Field vectors and helices are sampled
    /// from 0 up to this value.
    #[arg(long)]
    extent: Option<f64>,

    /// Number of positions at which the field vectors are drawn as arrow glyphs.
    #[arg(long)]
    glyphs: Option<usize>,

    /// Number of fine sample positions for the helix trajectory curves.
    #[arg(long)]
    helix: Option<usize>,

    /// File path of the output HTML figure.
    #[arg(short, long)]
    output: Option<String>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Wavelength: {:.6}
  - Axis Extent: {:.6}
  - Glyph Samples: {}
  - Helix Samples: {}
  - Output: {}
  ",
            self.wavelength,
            self.axis_extent,
            self.num_glyph_samples,
            self.num_helix_samples,
            self.output,
        )
    }
}
