//! Render-only widgets.
//!
//! Both widgets are pass-through renderers over the configuration objects
//! in [`crate::model`]: construct, hand them a configuration, render into
//! a frame. Highlight state is passed in by the owning component.

pub mod pie_chart;
pub mod region_map;

pub use pie_chart::PieChart;
pub use region_map::RegionMap;

use ratatui::style::Color;

/// Series colors, assigned by series/slice position.
pub const SERIES_PALETTE: [Color; 9] = [
    Color::Cyan,
    Color::LightBlue,
    Color::LightGreen,
    Color::Yellow,
    Color::LightMagenta,
    Color::LightRed,
    Color::Blue,
    Color::Green,
    Color::Gray,
];

pub fn series_color(index: usize) -> Color {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
