//! UI panel rendering subsystem
//!
//! - Header panel (title, user, clock, theme selector)
//! - Feature bar (auxiliary feature buttons)
//! - Welcome panel and tool panel (mutually exclusive central regions)
//! - Status bar (last action outcome)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod feature_bar;
pub mod welcome_panel;
pub mod tool_panel;
pub mod status_bar;
pub mod panel_manager;
