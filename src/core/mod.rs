// CalcIcon - core/mod.rs
//
// Core rendering logic: colours, layout arithmetic, glyph faces.
// Must NOT depend on: app, platform, or touch the filesystem.

pub mod builtin;
pub mod color;
pub mod face;
pub mod layout;
pub mod outline;
