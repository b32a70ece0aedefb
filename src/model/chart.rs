//! Pie chart configuration.

/// Mouse cursor hint for selectable points. Terminal cells have no cursor
/// shapes, so this is carried for completeness and ignored by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlotOptionsPie {
    pub allow_point_select: bool,
    pub cursor: Cursor,
    pub show_in_legend: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSeriesItem {
    pub name: String,
    pub y: f64,
    pub sliced: bool,
    pub selected: bool,
}

impl DataSeriesItem {
    pub fn new(name: impl Into<String>, y: f64) -> Self {
        Self {
            name: name.into(),
            y,
            sliced: false,
            selected: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSeries {
    pub name: Option<String>,
    pub items: Vec<DataSeriesItem>,
}

impl DataSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: DataSeriesItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.y).sum()
    }

    /// Share of the total for one item, in `0.0..=1.0`.
    pub fn fraction(&self, index: usize) -> Option<f64> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        self.items.get(index).map(|item| item.y / total)
    }

    pub fn selected(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }

    /// Select one item the way point selection behaves in the chart: the
    /// item becomes selected and sliced out, everything else is put back.
    /// Selecting the already-selected item deselects it.
    pub fn toggle_select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        let was_selected = self.items[index].selected;
        for item in &mut self.items {
            item.selected = false;
            item.sliced = false;
        }
        if !was_selected {
            self.items[index].selected = true;
            self.items[index].sliced = true;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartConfiguration {
    pub title: Option<String>,
    pub plot_options: PlotOptionsPie,
    pub series: DataSeries,
}

impl ChartConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }
}
