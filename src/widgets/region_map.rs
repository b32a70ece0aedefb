//! Region map on the library's world-map backdrop.

use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Block, Paragraph, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::data::find_atlas;
use crate::model::{MapConfiguration, Region, RegionAtlas};
use crate::widgets::series_color;

const BACKDROP_COLOR: Color = Color::DarkGray;

pub struct RegionMap<'a> {
    config: &'a MapConfiguration,
    highlight: Option<(usize, &'a str)>,
    focused: bool,
    highlight_style: Style,
}

impl<'a> RegionMap<'a> {
    pub fn new(config: &'a MapConfiguration) -> Self {
        Self {
            config,
            highlight: None,
            focused: false,
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Highlighted (series index, region code) pair, if any.
    pub fn highlight(mut self, highlight: Option<(usize, &'a str)>) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    fn is_highlighted(&self, series_index: usize, region: &Region) -> bool {
        self.focused && self.highlight == Some((series_index, region.code))
    }

    fn label_style(&self, series_index: usize, region: &Region) -> Style {
        if self.is_highlighted(series_index, region) {
            return self.highlight_style;
        }
        let labels = &self.config.data_labels;
        let mut style = Style::default().fg(labels.color);
        if labels.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Whether a region gets a printed label: gated by the configured rank,
    /// always shown for the highlighted region so the cursor stays visible.
    fn shows_label(&self, series_index: usize, region: &Region) -> bool {
        let labels = &self.config.data_labels;
        if !labels.enabled {
            return false;
        }
        if self.is_highlighted(series_index, region) {
            return true;
        }
        match labels.max_label_rank {
            Some(rank) => region.label_rank < rank,
            None => true,
        }
    }

    fn render_canvas(&self, atlas: &RegionAtlas, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lon_span = atlas.lon_bounds[1] - atlas.lon_bounds[0];
        let lat_span = atlas.lat_bounds[1] - atlas.lat_bounds[0];
        // Braille dot pitch, used to thicken markers and offset labels.
        let dot_w = lon_span / (f64::from(area.width) * 2.0);
        let dot_h = lat_span / (f64::from(area.height) * 4.0);

        let marked: HashSet<&str> = self
            .config
            .series
            .iter()
            .filter(|series| series.visible)
            .flat_map(|series| series.resolve(atlas))
            .map(|(_, region)| region.code)
            .collect();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(atlas.lon_bounds)
            .y_bounds(atlas.lat_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: BACKDROP_COLOR,
                });
                ctx.layer();

                for (series_index, series) in self.config.series.iter().enumerate() {
                    if !series.visible {
                        continue;
                    }
                    let coords: Vec<(f64, f64)> = series
                        .resolve(atlas)
                        .into_iter()
                        .flat_map(|(_, region)| marker_cluster(region, dot_w, dot_h))
                        .collect();
                    ctx.draw(&Points {
                        coords: &coords,
                        color: series_color(series_index),
                    });
                }

                // Regions outside every series only show up when the
                // configuration asks for all areas.
                if self.config.plot_options.all_areas {
                    let coords: Vec<(f64, f64)> = atlas
                        .regions
                        .iter()
                        .filter(|region| !marked.contains(region.code))
                        .flat_map(|region| marker_cluster(region, dot_w, dot_h))
                        .collect();
                    ctx.draw(&Points {
                        coords: &coords,
                        color: BACKDROP_COLOR,
                    });
                }

                ctx.layer();
                for (series_index, series) in self.config.series.iter().enumerate() {
                    if !series.visible {
                        continue;
                    }
                    for (_, region) in series.resolve(atlas) {
                        if !self.shows_label(series_index, region) {
                            continue;
                        }
                        ctx.print(
                            region.lon + dot_w * 2.0,
                            region.lat,
                            Line::from(Span::styled(
                                region.code,
                                self.label_style(series_index, region),
                            )),
                        );
                    }
                }
            });
        canvas.render(area, buf);

        if self.config.credits.enabled && area.height > 0 {
            let text = self
                .config
                .credits
                .text
                .clone()
                .unwrap_or_else(|| atlas.credits.to_string());
            let credit_area = Rect {
                y: area.bottom().saturating_sub(1),
                height: 1,
                ..area
            };
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(BACKDROP_COLOR),
            )))
            .alignment(Alignment::Right)
            .render(credit_area, buf);
        }
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .config
            .series
            .iter()
            .enumerate()
            .map(|(series_index, series)| {
                if series.visible {
                    Line::from(vec![
                        Span::styled("■ ", Style::default().fg(series_color(series_index))),
                        Span::raw(series.name.clone()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("■ "),
                        Span::raw(series.name.clone()),
                    ])
                    .style(
                        Style::default()
                            .fg(BACKDROP_COLOR)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                }
            })
            .collect();

        let top = (area.height as usize).saturating_sub(lines.len()) / 2;
        let legend_area = Rect {
            y: area.y + top as u16,
            height: area.height.saturating_sub(top as u16),
            ..area
        };
        Paragraph::new(lines).render(legend_area, buf);
    }

    fn legend_width(&self) -> u16 {
        let name_width = self
            .config
            .series
            .iter()
            .map(|series| series.name.width())
            .max()
            .unwrap_or_default();
        (2 + name_width) as u16
    }
}

impl Widget for RegionMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default();
        if let Some(title) = &self.config.title {
            block = block.title(Line::from(title.clone()).centered());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 10 || inner.height < 4 {
            return;
        }

        let Some(atlas) = find_atlas(&self.config.map) else {
            Paragraph::new(format!("unknown map source: {}", self.config.map))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        };

        let legend_width = if self.config.legend.enabled {
            self.legend_width().min(inner.width / 3)
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(legend_width)])
            .split(inner);

        let mut canvas_area = chunks[0];
        canvas_area.height = canvas_area
            .height
            .saturating_sub(self.config.spacing_bottom);

        self.render_canvas(atlas, canvas_area, buf);
        if legend_width > 0 {
            self.render_legend(chunks[1], buf);
        }
    }
}

/// A small plus of braille dots so a marker reads as more than one pixel.
fn marker_cluster(region: &Region, dot_w: f64, dot_h: f64) -> [(f64, f64); 5] {
    let (lon, lat) = (region.lon, region.lat);
    [
        (lon, lat),
        (lon - dot_w, lat),
        (lon + dot_w, lat),
        (lon, lat - dot_h),
        (lon, lat + dot_h),
    ]
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::data::timezone_series;
    use crate::model::{DataLabels, Tooltip};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn demo_config() -> MapConfiguration {
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
        config.series = timezone_series();
        config
    }

    fn render(config: &MapConfiguration) -> String {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(RegionMap::new(config), f.area()))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_render_shows_title_legend_and_labels() {
        let text = render(&demo_config());
        assert!(text.contains("Europe time zones"));
        assert!(text.contains("UTC + 1"));
        assert!(text.contains("UTC + 3"));
        // Prominent countries get their code printed on the map.
        assert!(text.contains("FR"));
        assert!(text.contains("DE"));
    }

    #[test]
    fn test_label_rank_gates_labels() {
        let text = render(&demo_config());
        // Liechtenstein has rank 6, above the threshold of 5.
        assert!(!text.contains("LI"));
    }

    #[test]
    fn test_hidden_series_drops_its_labels() {
        let mut config = demo_config();
        config.series[1].visible = false;
        let text = render(&config);
        assert!(!text.contains("FR"));
        // The legend still lists the hidden series.
        assert!(text.contains("UTC + 1"));
        // Other series keep rendering.
        assert!(text.contains("GB"));
    }

    #[test]
    fn test_disabled_legend_is_not_rendered() {
        let mut config = demo_config();
        config.legend.enabled = false;
        let text = render(&config);
        assert!(!text.contains("UTC + 1"));
    }

    #[test]
    fn test_credits_line() {
        let mut config = demo_config();
        config.credits.enabled = true;
        let text = render(&config);
        assert!(text.contains("Natural Earth"));

        config.credits.text = Some("custom credit".to_string());
        let text = render(&config);
        assert!(text.contains("custom credit"));
    }

    #[test]
    fn test_unknown_map_source() {
        let mut config = demo_config();
        config.set_map("custom/mars");
        let text = render(&config);
        assert!(text.contains("unknown map source: custom/mars"));
    }

    #[test]
    fn test_render_into_tiny_area_is_safe() {
        let config = demo_config();
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(RegionMap::new(&config), f.area()))
            .unwrap();
    }
}
