//! ==============================================================================
//! header_bar.rs - header bar render
//! ==============================================================================
//!
//! purpose:
//!     builds the header visual tree from a HeaderConfiguration.
//!
//! output shape (order-significant):
//!     header.att-header
//!       div.att-header-inner
//!         div.att-left
//!           img.att-logo (src = logoSrc, alt = "app-logo")
//!           div.att-title
//!             span.att-title-main (title)
//!             span.att-title-sub ("Connected")
//!         nav.att-control (only when the control panel is shown)
//!           button.att-btn ("Start")
//!           button.att-btn ("Stop")
//!           div.att-status ("Status: " strong "Idle")
//!       div.att-sep
//!
//! the start/stop buttons carry no behavior and the status is a fixed
//! literal. wiring them to a control service is left to the host.
//!
//! ==============================================================================

use crate::config::HeaderConfiguration;
use crate::tree::{Element, Tag, VisualTree};

pub const DEFAULT_TITLE: &str = "AUTO TRADING TRACKER";
pub const DEFAULT_SHOW_CONTROL_PANEL: bool = true;

pub const LOGO_ALT: &str = "app-logo";
pub const CONNECTION_LABEL: &str = "Connected";
pub const CONTROL_PANEL_LABEL: &str = "control-panel";
pub const START_LABEL: &str = "Start";
pub const STOP_LABEL: &str = "Stop";
pub const STATUS_PREFIX: &str = "Status: ";
pub const STATUS_IDLE: &str = "Idle";

/// style-class identifiers assigned by the header
///
/// integrators bind their stylesheet to exactly these names, so renaming
/// any of them breaks custom themes.
pub mod classes {
    pub const ROOT: &str = "att-header";
    pub const INNER: &str = "att-header-inner";
    pub const LEFT: &str = "att-left";
    pub const LOGO: &str = "att-logo";
    pub const TITLE: &str = "att-title";
    pub const TITLE_MAIN: &str = "att-title-main";
    pub const TITLE_SUB: &str = "att-title-sub";
    pub const CONTROL: &str = "att-control";
    pub const BUTTON: &str = "att-btn";
    pub const STATUS: &str = "att-status";
    pub const SEPARATOR: &str = "att-sep";

    pub const ALL: [&str; 11] = [
        ROOT, INNER, LEFT, LOGO, TITLE, TITLE_MAIN, TITLE_SUB, CONTROL, BUTTON, STATUS, SEPARATOR,
    ];
}

// ==============================================================================
// render
// ==============================================================================

/// main title the header shows for `config`
pub fn resolved_title(config: &HeaderConfiguration) -> &str {
    config.title.as_deref().unwrap_or(DEFAULT_TITLE)
}

/// render the header for one configuration
///
/// pure and infallible: the same configuration always yields the same tree.
pub fn render(config: &HeaderConfiguration) -> VisualTree {
    let title = resolved_title(config);
    let show_control_panel = config.show_control_panel.unwrap_or(DEFAULT_SHOW_CONTROL_PANEL);

    tracing::debug!(title, show_control_panel, "rendering header bar");

    let mut inner = Element::new(Tag::Div)
        .with_class(classes::INNER)
        .with_child(branding(&config.logo_src, title));
    if show_control_panel {
        inner = inner.with_child(control_panel());
    }

    VisualTree::new(
        Element::new(Tag::Header)
            .with_class(classes::ROOT)
            .with_child(inner)
            .with_child(Element::new(Tag::Div).with_class(classes::SEPARATOR)),
    )
}

fn branding(logo_src: &str, title: &str) -> Element {
    let logo = Element::new(Tag::Img)
        .with_class(classes::LOGO)
        .with_attr("src", logo_src)
        .with_attr("alt", LOGO_ALT);

    let title_block = Element::new(Tag::Div)
        .with_class(classes::TITLE)
        .with_child(
            Element::new(Tag::Span)
                .with_class(classes::TITLE_MAIN)
                .with_text(title),
        )
        .with_child(
            Element::new(Tag::Span)
                .with_class(classes::TITLE_SUB)
                .with_text(CONNECTION_LABEL),
        );

    Element::new(Tag::Div)
        .with_class(classes::LEFT)
        .with_child(logo)
        .with_child(title_block)
}

fn control_panel() -> Element {
    let button = |label: &str| {
        Element::new(Tag::Button)
            .with_class(classes::BUTTON)
            .with_text(label)
    };

    Element::new(Tag::Nav)
        .with_class(classes::CONTROL)
        .with_attr("aria-label", CONTROL_PANEL_LABEL)
        .with_child(button(START_LABEL))
        .with_child(button(STOP_LABEL))
        .with_child(
            Element::new(Tag::Div)
                .with_class(classes::STATUS)
                .with_text(STATUS_PREFIX)
                .with_child(Element::new(Tag::Strong).with_text(STATUS_IDLE)),
        )
}

// ==============================================================================
// tests
// ==============================================================================
