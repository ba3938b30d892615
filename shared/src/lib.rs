//! ==============================================================================
//! lib.rs - shared header types for the trading tracker dashboard
//! ==============================================================================
//!
//! purpose:
//!     defines the header configuration, the abstract visual tree, and the
//!     pure render function that turns one into the other. nothing here
//!     touches the dom, so the whole contract is testable natively.
//!
//! relationships:
//!     - used by: dashboard (HeaderBar component maps VisualTree to leptos views)
//!     - used by: dashboard/config (HeaderConfiguration::from_json)
//!
//! design rationale:
//!     the header is a pure function of its configuration. keeping the
//!     tree construction out of the wasm crate means the class-name contract
//!     and the fixed literals are checked by plain `cargo test`.
//!
//! ==============================================================================

pub mod config;
pub mod header_bar;
pub mod tree;

pub use config::{ConfigError, HeaderConfiguration};
pub use header_bar::{classes, render, resolved_title};
pub use tree::{Element, Node, Tag, VisualTree};
