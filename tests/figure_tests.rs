use emwave::{figure::WaveFigure, settings};

#[test]
fn hello_world() {
    assert_eq!(2 + 2, 4);
}

#[test]
fn default_config_matches_fixed_constants() {
    let settings = settings::load_default_config().unwrap();

    assert_eq!(settings.wavelength, 1.0);
    assert_eq!(settings.axis_extent, 6.0);
    assert_eq!(settings.num_glyph_samples, 12);
    assert_eq!(settings.num_helix_samples, 480);
    assert_eq!(settings.arrow_length, 0.5);
    assert!((settings.wavenumber() - 2.0 * std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn end_to_end_writes_html() {
    let mut settings = settings::load_default_config().unwrap();
    let out = std::env::temp_dir().join("emwave_end_to_end.html");
    settings.output = out.to_string_lossy().into_owned();

    let mut figure = WaveFigure::new(settings);
    figure.assemble();
    figure.writeup().unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("plotly"));

    std::fs::remove_file(&out).unwrap();
}

#[test]
fn writeup_creates_parent_directories() {
    let dir = std::env::temp_dir().join("emwave_nested_out");
    let out = dir.join("plots").join("wave.html");

    let mut settings = settings::load_default_config().unwrap();
    settings.output = out.to_string_lossy().into_owned();

    let mut figure = WaveFigure::new(settings);
    figure.assemble();
    figure.writeup().unwrap();

    assert!(out.exists());

    std::fs::remove_dir_all(&dir).unwrap();
}
