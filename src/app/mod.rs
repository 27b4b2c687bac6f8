// CalcIcon - app/mod.rs
//
// Application layer: orchestrates core rendering and platform I/O.

pub mod renderer;
