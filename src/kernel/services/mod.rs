//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the kernel.
//! - `adapters`: pattern engines and filesystem-backed settings.
//! - `bus`: synchronous change notification.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{search_bus, SearchBus, SearchBusReceiver, SearchBusSender, SearchEvent};
