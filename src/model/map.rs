//! Region map configuration.
//!
//! A [`MapConfiguration`] references its topology by atlas id (resolved
//! through [`crate::data::find_atlas`]) and carries a list of
//! [`MapDataSeries`], each joining its items to atlas regions by a key pair,
//! the way charting libraries join series data to GeoJSON properties.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credits {
    pub enabled: bool,
    /// Overrides the atlas credit line when set.
    pub text: Option<String>,
}

impl Default for Credits {
    fn default() -> Self {
        Self {
            enabled: true,
            text: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotOptionsMap {
    /// When set, every atlas region is drawn even if no series contains it.
    pub all_areas: bool,
}

impl Default for PlotOptionsMap {
    fn default() -> Self {
        Self { all_areas: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataLabels {
    pub enabled: bool,
    pub color: Color,
    pub bold: bool,
    /// Only regions with `label_rank` strictly below this render a label.
    pub max_label_rank: Option<u8>,
}

impl Default for DataLabels {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::White,
            bold: false,
            max_label_rank: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub header_format: String,
    pub point_format: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            header_format: "{series.name}".to_string(),
            point_format: "{point.name}".to_string(),
        }
    }
}

impl Tooltip {
    pub fn header_text(&self, region: &Region, series: &MapDataSeries) -> String {
        substitute(&self.header_format, region, series)
    }

    pub fn point_text(&self, region: &Region, series: &MapDataSeries) -> String {
        substitute(&self.point_format, region, series)
    }
}

fn substitute(format: &str, region: &Region, series: &MapDataSeries) -> String {
    format
        .replace("{point.name}", region.name)
        .replace("{point.code}", region.code)
        .replace("{series.name}", &series.name)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapDataSeriesItem {
    pub code: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapDataSeries {
    pub name: String,
    /// (atlas key, item key) pair the join is resolved on.
    pub join_by: (String, String),
    pub visible: bool,
    pub items: Vec<MapDataSeriesItem>,
}

impl MapDataSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            join_by: ("iso-a2".to_string(), "code".to_string()),
            visible: true,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, code: impl Into<String>, value: f64) {
        self.items.push(MapDataSeriesItem {
            code: code.into(),
            value,
        });
    }

    pub fn set_join_by(&mut self, atlas_key: impl Into<String>, item_key: impl Into<String>) {
        self.join_by = (atlas_key.into(), item_key.into());
    }

    fn item_key<'a>(&self, item: &'a MapDataSeriesItem) -> Option<&'a str> {
        match self.join_by.1.as_str() {
            "code" => Some(&item.code),
            _ => None,
        }
    }

    /// Join the series items to atlas regions. Items whose key matches no
    /// region are skipped, preserving item order for the rest.
    pub fn resolve<'a>(
        &'a self,
        atlas: &'a RegionAtlas,
    ) -> Vec<(&'a MapDataSeriesItem, &'a Region)> {
        self.items
            .iter()
            .filter_map(|item| {
                let key = self.item_key(item)?;
                let region = atlas.region_by(&self.join_by.0, key)?;
                Some((item, region))
            })
            .collect()
    }
}

/// One entry of a [`RegionAtlas`]: a representative point for a region,
/// keyed by its ISO-3166 alpha-2 code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
    /// Prominence rank; smaller is more prominent. Used to gate data labels.
    pub label_rank: u8,
}

impl Region {
    fn key(&self, key: &str) -> Option<&'static str> {
        match key {
            "iso-a2" => Some(self.code),
            "name" => Some(self.name),
            _ => None,
        }
    }
}

/// Static region table standing in for an external topology source. The
/// world-map backdrop itself ships with the rendering library; the atlas
/// contributes the viewport bounds and the per-region join points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionAtlas {
    pub id: &'static str,
    pub name: &'static str,
    pub credits: &'static str,
    pub lon_bounds: [f64; 2],
    pub lat_bounds: [f64; 2],
    pub regions: &'static [Region],
}

impl RegionAtlas {
    pub fn region_by(&self, key: &str, value: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|region| region.key(key) == Some(value))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.region_by("iso-a2", code).is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapConfiguration {
    pub title: Option<String>,
    /// Atlas id, e.g. `"custom/europe"`.
    pub map: String,
    /// Blank rows kept under the map pane.
    pub spacing_bottom: u16,
    pub legend: Legend,
    pub credits: Credits,
    pub plot_options: PlotOptionsMap,
    pub data_labels: DataLabels,
    pub tooltip: Tooltip,
    pub series: Vec<MapDataSeries>,
}

impl MapConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_map(&mut self, id: impl Into<String>) {
        self.map = id.into();
    }
}
