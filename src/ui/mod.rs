//! Terminal UI: capability detection, styling primitives and widgets.

pub mod backend;
pub mod context;
pub mod live_region;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod widgets;
