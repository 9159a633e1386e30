//! Wall topology and panelization engine.
//!
//! Reconstructs the wall network of a building plan, traces its outer
//! footprint, classifies how walls meet, and cuts each wall into fixed-width
//! stock panels while tracking offcuts across the whole project.

pub mod config;
pub mod error;
pub mod math;
pub mod model;
pub mod operations;
pub mod topology;

pub use config::PanelConfig;
pub use error::{PanelisError, Result};
