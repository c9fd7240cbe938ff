//! Application state shared by every handler.

mod service_state;

pub use service_state::ServiceState;
