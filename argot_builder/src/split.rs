mod escaped;
mod model;
mod windows;

pub use model::*;
