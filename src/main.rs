use emwave::figure::WaveFigure;
use emwave::settings::{self};

fn main() {
    let settings = settings::load_config().unwrap();
    let mut figure = WaveFigure::new(settings);

    figure.assemble();
    figure.writeup().unwrap();
}
