//! WebGPU rendering module
//!
//! Flat-colored triangle lists built on the CPU from the simulation's render feed.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
