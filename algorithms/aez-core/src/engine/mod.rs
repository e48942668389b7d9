//! Execution Engine
//!
//! CPU feature dispatch across the AES-NI and portable kernel tables.

pub mod dispatcher;

pub use dispatcher::get_active_backend_name;
