// CalcIcon - platform/mod.rs
//
// Platform layer: host font discovery and filesystem output.
// Must NOT depend on: app.

pub mod fonts;
pub mod fs;
