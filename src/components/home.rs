use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    data,
    mode::Mode,
    model::{
        ChartConfiguration, Cursor, DataLabels, MapConfiguration, PlotOptionsPie, Region, Tooltip,
    },
    tui::Frame,
    widgets::{PieChart, RegionMap},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Map,
    Chart,
}

/// The main view: a region map of the European time zones stacked on top of
/// a pie chart of browser market shares, both driven entirely by the static
/// configurations assembled in the constructor.
pub struct Home {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    chart: ChartConfiguration,
    map: MapConfiguration,
    focus: Pane,
    map_cursor: usize,
    chart_cursor: usize,
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

impl Home {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            config: Config::default(),
            chart: Self::chart_configuration(),
            map: Self::map_configuration(),
            focus: Pane::default(),
            map_cursor: 0,
            chart_cursor: 0,
        }
    }

    fn chart_configuration() -> ChartConfiguration {
        let mut conf = ChartConfiguration::new();
        conf.set_title("Browser market shares in January, 2018");

        conf.plot_options = PlotOptionsPie {
            allow_point_select: true,
            cursor: Cursor::Pointer,
            show_in_legend: true,
        };

        conf.series = data::browser_market_shares();
        conf
    }

    fn map_configuration() -> MapConfiguration {
        let mut config = MapConfiguration::new();
        config.set_title("Europe time zones");
        config.set_map("custom/europe");
        config.spacing_bottom = 1;

        config.legend.enabled = true;
        config.credits.enabled = false;
        config.plot_options.all_areas = false;

        config.data_labels = DataLabels {
            enabled: true,
            color: Color::White,
            bold: true,
            max_label_rank: Some(5),
        };

        config.tooltip = Tooltip {
            header_format: String::new(),
            point_format: "{point.name}: {series.name}".to_string(),
        };

        config.series = data::timezone_series();
        config
    }

    pub fn chart(&self) -> &ChartConfiguration {
        &self.chart
    }

    pub fn map(&self) -> &MapConfiguration {
        &self.map
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    /// Resolved (series index, region) pairs of the visible map series, in
    /// series and item order. This is the cursor space of the map pane.
    fn map_entries(&self) -> Vec<(usize, &Region)> {
        let Some(atlas) = data::find_atlas(&self.map.map) else {
            return Vec::new();
        };
        self.map
            .series
            .iter()
            .enumerate()
            .filter(|(_, series)| series.visible)
            .flat_map(|(series_index, series)| {
                series
                    .resolve(atlas)
                    .into_iter()
                    .map(move |(_, region)| (series_index, region))
            })
            .collect()
    }

    /// Tooltip text for the highlighted point, rendered from the configured
    /// formats.
    pub fn tooltip_message(&self) -> Option<String> {
        match self.focus {
            Pane::Map => {
                let entries = self.map_entries();
                let (series_index, region) = *entries.get(self.map_cursor)?;
                let series = self.map.series.get(series_index)?;
                let header = self.map.tooltip.header_text(region, series);
                let point = self.map.tooltip.point_text(region, series);
                if header.is_empty() {
                    Some(point)
                } else {
                    Some(format!("{header} {point}"))
                }
            }
            Pane::Chart => {
                let item = self.chart.series.items.get(self.chart_cursor)?;
                Some(format!("{}: {:.2}%", item.name, item.y))
            }
        }
    }

    fn cursor_space(&self) -> usize {
        match self.focus {
            Pane::Map => self.map_entries().len(),
            Pane::Chart => self.chart.series.len(),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.cursor_space();
        if len == 0 {
            return;
        }
        let cursor = match self.focus {
            Pane::Map => &mut self.map_cursor,
            Pane::Chart => &mut self.chart_cursor,
        };
        *cursor = (*cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn toggle_point(&mut self) -> Option<String> {
        match self.focus {
            Pane::Chart => {
                if !self.chart.plot_options.allow_point_select {
                    return None;
                }
                self.chart.series.toggle_select(self.chart_cursor);
                let item = self.chart.series.items.get(self.chart_cursor)?;
                let state = if item.selected { "selected" } else { "deselected" };
                Some(format!("{} {state}", item.name))
            }
            Pane::Map => {
                // Legend semantics: toggle the whole series the highlighted
                // region belongs to.
                let series_index = {
                    let entries = self.map_entries();
                    entries.get(self.map_cursor).map(|(index, _)| *index)?
                };
                let series = self.map.series.get_mut(series_index)?;
                series.visible = !series.visible;
                let message = format!(
                    "{} {}",
                    series.name,
                    if series.visible { "shown" } else { "hidden" }
                );
                let len = self.map_entries().len();
                self.map_cursor = self.map_cursor.min(len.saturating_sub(1));
                Some(message)
            }
        }
    }

    fn help_message(&self) -> String {
        "tab switches panes, arrows move, enter toggles a point or series, q quits".to_string()
    }

    fn highlight_style(&self) -> Style {
        self.config
            .styles
            .get(&Mode::Home)
            .and_then(|styles| styles.get("highlight"))
            .copied()
            .unwrap_or_else(|| Style::default().add_modifier(Modifier::REVERSED))
    }
}

impl Component for Home {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn init(&mut self, _area: Rect) -> Result<()> {
        if let (Some(tx), Some(message)) = (&self.command_tx, self.tooltip_message()) {
            tx.send(Action::SystemMessage(message))?;
        }
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let message = match action {
            Action::FocusNext => {
                self.focus = match self.focus {
                    Pane::Map => Pane::Chart,
                    Pane::Chart => Pane::Map,
                };
                self.tooltip_message()
            }
            Action::NextPoint => {
                self.move_cursor(1);
                self.tooltip_message()
            }
            Action::PreviousPoint => {
                self.move_cursor(-1);
                self.tooltip_message()
            }
            Action::TogglePoint => self.toggle_point(),
            Action::Refresh => self.tooltip_message(),
            Action::Help => Some(self.help_message()),
            _ => None,
        };

        Ok(message.map(Action::SystemMessage))
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(area);
        let panes = Layout::new(
            Direction::Vertical,
            [Constraint::Percentage(60), Constraint::Percentage(40)],
        )
        .split(layout[0]);

        let highlight_style = self.highlight_style();

        let entries = self.map_entries();
        let map_highlight = entries
            .get(self.map_cursor)
            .map(|(series_index, region)| (*series_index, region.code));
        f.render_widget(
            RegionMap::new(&self.map)
                .highlight(map_highlight)
                .focused(self.focus == Pane::Map)
                .highlight_style(highlight_style),
            panes[0],
        );

        f.render_widget(
            PieChart::new(&self.chart)
                .highlight(Some(self.chart_cursor))
                .focused(self.focus == Pane::Chart)
                .highlight_style(highlight_style),
            panes[1],
        );

        Ok(())
    }
}
