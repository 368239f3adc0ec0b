pub mod config;
pub mod error;

pub use config::{AviaryConfig, RenderConfig, SimulationConfig};
pub use error::{AviaryError, Result};
