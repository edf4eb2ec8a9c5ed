/// UI module
///
/// This module turns state into something on screen:
/// - Pure page description built from a store snapshot (page.rs)
/// - Tab selection state machine (tabs.rs)
/// - Mapping from a page description to iced widgets (widgets.rs)

pub mod page;
pub mod tabs;
pub mod widgets;
