//! Service Ports
//!
//! Abstract interfaces for ambient services.

mod clock;

pub use clock::*;
