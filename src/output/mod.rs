//! Output encoders for rendered framebuffers.

pub mod png;

pub use png::PngEncoder;
