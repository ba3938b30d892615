//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header_bar;

pub use header_bar::HeaderBar;
