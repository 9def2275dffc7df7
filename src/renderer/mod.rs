//! Renderer hand-off
//!
//! Drawing is done by the host's model/shader pipeline; this module only turns
//! a `Scene` into world matrices it can upload.

pub mod instance;

pub use instance::{DrawList, ModelInstance};
