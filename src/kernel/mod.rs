//! # Kernel Initialization Module
//!
//! Provides the boot sequence and status tracking infrastructure.
//!
//! ## Submodules
//!
//! - `init`: Kernel initialization sequence
//! - `status`: Component status tracking, reported over serial
//!
//! ## Example
//!
//! ```ignore
//! use crate::kernel::{register_component, update_component_status, InitStatus};
//!
//! register_component("Vector Table")?;
//! // ... load the table ...
//! update_component_status("Vector Table", InitStatus::Completed);
//! ```

/// Kernel initialization and bootstrap module
pub mod init;
pub mod status;

pub use init::init_kernel;
pub use status::{
    all_components_ready, component_status, register_component, update_component_status,
    InitStatus,
};
