//! Scene assembly and HTML writeup.
//!
//! This module drives the whole visualization: it samples the field at each
//! coarse position and renders the three arrow glyphs, adds the two helix
//! trajectory curves and the static text labels, configures the 3D scene
//! layout, and writes the finished figure to a standalone HTML file.

use anyhow::Result;
use nalgebra::Point3;
use plotly::common::{HoverInfo, Line, Mode, Title};
use plotly::layout::{AspectMode, AspectRatio, Axis, Camera, Eye, LayoutScene};
use plotly::{Layout, Plot, Scatter3D, Trace};
use std::path::Path;

use crate::arrow::{self, Glyph};
use crate::settings::{Settings, B_COLOR, E_COLOR, HELIX_WIDTH, S_COLOR};
use crate::wave::{self, FieldSample, Helix};


/// Overall figure title.
const FIGURE_TITLE: &str =
    "Electromagnetic Wave Structure (CM-Maxwell unified equation)<br>Wave propagates in +z direction";

/// Static text labels describing the visual elements, at hand-chosen
/// positions beside the wave.
const LABELS: [(f64, f64, f64, &str); 5] = [
    (1.2, 0.0, 3.0, "E: Electric field<br>E(z,t) = E₀ cos(kz-ωt)"),
    (0.0, 1.2, 3.0, "B: Magnetic field<br>B(z,t) = B₀ cos(kz-ωt)"),
    (
        0.0,
        0.0,
        4.0,
        "S: Poynting vector<br>S = (1/μ₀)E×B<br>Energy flux +z direction",
    ),
    (1.3, 0.0, 0.5, "Red helix: E field trajectory"),
    (0.0, 1.3, 1.0, "Blue helix: B field trajectory"),
];

/// The accumulating plane-wave figure.
///
/// **Context**: The scene is the single mutable accumulator of the program.
/// Every drawable element is appended to it during assembly, after which it
/// is serialized to the output file exactly once.
///
/// **How it Works**: Holds the runtime settings and the ordered trace list.
/// `assemble` renders glyphs, curves, and labels into the list; `writeup`
/// consumes the figure, attaches the scene layout, and exports HTML.
pub struct WaveFigure {
    pub settings: Settings,
    pub traces: Vec<Box<dyn Trace>>,
}

impl WaveFigure {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            traces: Vec::new(),
        }
    }

    /// Renders every drawable element of the scene into the trace list.
    pub fn assemble(&mut self) {
        self.add_field_glyphs();
        self.add_helices();
        self.add_labels();
    }

    /// One electric, one magnetic, and one energy-flux arrow per coarse
    /// sample position along the propagation axis.
    fn add_field_glyphs(&mut self) {
        for &z in wave::glyph_positions(&self.settings).iter() {
            let origin = Point3::new(0.0, 0.0, z);
            let sample = FieldSample::at(&self.settings, z);

            for glyph in [
                Glyph::new(origin, sample.e, E_COLOR),
                Glyph::new(origin, sample.b, B_COLOR),
                Glyph::new(origin, sample.s, S_COLOR),
            ] {
                arrow::add_arrow(&mut self.traces, &self.settings, &glyph);
            }
        }
    }

    /// The two tip-trajectory curves, drawn as thin continuous lines.
    fn add_helices(&mut self) {
        let e_helix = wave::electric_helix(&self.settings);
        let b_helix = wave::magnetic_helix(&self.settings);

        self.add_helix(e_helix, E_COLOR);
        self.add_helix(b_helix, B_COLOR);
    }

    fn add_helix(&mut self, helix: Helix, color: &'static str) {
        let trace = Scatter3D::new(helix.x, helix.y, helix.z)
            .mode(Mode::Lines)
            .line(Line::new().color(color).width(HELIX_WIDTH))
            .show_legend(false);
        self.traces.push(trace);
    }

    /// Static text labels rendered as single-point text traces. The plotting
    /// crate exposes no plotly.js scene annotations, so each label is a
    /// text-mode marker pinned at its 3D position instead.
    fn add_labels(&mut self) {
        for (x, y, z, text) in LABELS {
            let label = Scatter3D::new(vec![x], vec![y], vec![z])
                .mode(Mode::Text)
                .text(text)
                .show_legend(false)
                .hover_info(HoverInfo::Skip);
            self.traces.push(label);
        }
    }

    /// Scene layout: axis titles, manual aspect ratio, fixed camera.
    fn layout(&self) -> Layout {
        Layout::new().title(Title::from(FIGURE_TITLE)).scene(
            LayoutScene::new()
                .x_axis(Axis::new().title(Title::from("X")))
                .y_axis(Axis::new().title(Title::from("Y")))
                .z_axis(Axis::new().title(Title::from("Z (propagation direction)")))
                .aspect_mode(AspectMode::Manual)
                .aspect_ratio(AspectRatio::new().x(0.7).y(0.7).z(1.0))
                .camera(Camera::new().eye(Eye::new().x(-1.8).y(-1.8).z(1.5))),
        )
    }

    /// Writes the assembled figure to the output HTML file and prints a
    /// confirmation line.
    pub fn writeup(self) -> Result<()> {
        let layout = self.layout();
        let output = self.settings.output;

        let mut plot = Plot::new();
        for trace in self.traces {
            plot.add_trace(trace);
        }
        plot.set_layout(layout);

        if let Some(parent) = Path::new(&output).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        plot.write_html(&output);

        println!("{}", confirmation_line(&output));

        Ok(())
    }
}

/// The single console line printed after a successful export.
fn confirmation_line(output: &str) -> String {
    format!("✅ saved: {}", output)
}
