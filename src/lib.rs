// CalcIcon - lib.rs
//
// Library entry point, exposing all modules for integration testing.
// The binary in `main.rs` only parses arguments, sets up logging and calls
// `app::renderer::render_icon`.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
