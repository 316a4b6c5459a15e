//! Core systems for Starlight.
//!
//! This crate provides the foundational pieces of the Starlight widget
//! library:
//!
//! - **Object Model**: identity, naming, and parent-child ownership for
//!   widgets and models
//! - **Signal/Slot System**: type-safe inter-object communication
//! - **Logging**: `tracing` targets for filtering per subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use starlight_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Logging
//!
//! Starlight instruments itself with the `tracing` crate. Install a
//! subscriber in the application to see logs; see [`logging`] for the
//! target names used by each subsystem.

mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use error::{CoreError, Result};
pub use object::{
    global_registry, init_global_registry, Object, ObjectBase, ObjectError, ObjectId,
    ObjectRegistry, ObjectResult,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
