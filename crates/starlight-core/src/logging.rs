//! Logging facilities for Starlight.
//!
//! Starlight uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Widget state transitions and signal emissions are logged at `trace`
//! level under the targets listed in [`targets`], so they can be enabled
//! selectively with a filter directive such as
//! `starlight::editor=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "starlight_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "starlight_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "starlight_core::object";
    /// Rating editor widget target.
    pub const EDITOR: &str = "starlight::editor";
    /// Item delegate target.
    pub const DELEGATE: &str = "starlight::delegate";
}
