//! Logging facilities for gridsource.
//!
//! gridsource uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Events are tagged with per-subsystem targets so they can be filtered with
//! `tracing` directives, e.g. `RUST_LOG=gridsource::source=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "gridsource_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "gridsource_core::signal";
    /// Data source (resolver / edit sink) target.
    pub const SOURCE: &str = "gridsource::source";
    /// Column registry target.
    pub const COLUMN: &str = "gridsource::column";
    /// Selection controller target.
    pub const SELECTION: &str = "gridsource::selection";
    /// Display order / remapping target.
    pub const DISPLAY_ORDER: &str = "gridsource::display_order";
}
