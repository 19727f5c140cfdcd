pub mod arrow;
pub mod figure;
pub mod settings;
pub mod wave;
