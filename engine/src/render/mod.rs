//! Render Data Module
//!
//! GPU-facing camera data. The engine produces view transforms and uniform
//! payloads; device setup, pipelines and draw submission belong to the host
//! renderer.

pub mod uniforms;

pub use uniforms::CameraUniforms;
