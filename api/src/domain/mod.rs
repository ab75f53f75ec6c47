//! Domain layer
//!
//! - `entities`: request and response models
//! - `ports`: trait definitions for the data the handlers read

pub mod entities;
pub mod ports;
