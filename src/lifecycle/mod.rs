//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT (signals.rs) or programmatic trigger (shutdown.rs)
//!     → stop accepting → drain in-flight requests → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
