//! Widget configuration objects.
//!
//! The widgets in [`crate::widgets`] are pass-through renderers: they draw
//! exactly what these objects describe and keep no state of their own. The
//! [`crate::components::Home`] view fills them in with the static datasets
//! from [`crate::data`].

pub mod chart;
pub mod map;

pub use chart::{ChartConfiguration, Cursor, DataSeries, DataSeriesItem, PlotOptionsPie};
pub use map::{
    Credits, DataLabels, Legend, MapConfiguration, MapDataSeries, MapDataSeriesItem,
    PlotOptionsMap, Region, RegionAtlas, Tooltip,
};
