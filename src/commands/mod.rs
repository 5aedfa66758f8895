//! Command handler layer.
//!
//! ## Files
//! - `report.rs` — device probe, section collection, rendering and export.
//!
//! ## Principles
//! - Match CLI inputs here.
//! - Delegate collection logic to `services/*`.
//! - Keep output schema stable.

pub mod report;
