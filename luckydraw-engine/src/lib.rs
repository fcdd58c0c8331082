pub mod config;
pub mod engine;
pub mod error;
pub mod frequent;
pub mod gaussian;
pub mod pool;
pub mod sampler;

pub use engine::DrawEngine;
pub use error::DrawError;
