//! Braille-canvas pie chart.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Paragraph, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::model::{ChartConfiguration, DataSeries};
use crate::widgets::series_color;

/// Radial sampling step of the rasterizer, in circle units.
pub const RASTER_STEP: f64 = 0.035;

const RADIUS: f64 = 1.0;
const SLICE_OFFSET: f64 = 0.18;

pub struct PieChart<'a> {
    config: &'a ChartConfiguration,
    highlight: Option<usize>,
    focused: bool,
    highlight_style: Style,
}

impl<'a> PieChart<'a> {
    pub fn new(config: &'a ChartConfiguration) -> Self {
        Self {
            config,
            highlight: None,
            focused: false,
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn highlight(mut self, highlight: Option<usize>) -> Self {
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

    fn render_pie(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // A terminal cell is roughly twice as tall as it is wide; widen the
        // bounds so the circle stays a circle.
        let aspect = f64::from(area.width) / (f64::from(area.height) * 2.0);
        let reach = RADIUS + SLICE_OFFSET + 0.1;
        let (x_half, y_half) = if aspect >= 1.0 {
            (reach * aspect, reach)
        } else {
            (reach, reach / aspect)
        };

        let slices = slice_points(&self.config.series, RADIUS, SLICE_OFFSET, RASTER_STEP);
        let labels = self.share_labels();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-x_half, x_half])
            .y_bounds([-y_half, y_half])
            .paint(|ctx| {
                for slice in &slices {
                    ctx.draw(&Points {
                        coords: &slice.coords,
                        color: series_color(slice.index),
                    });
                }
                ctx.layer();
                for (x, y, text) in &labels {
                    ctx.print(
                        *x,
                        *y,
                        Line::from(Span::styled(
                            text.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                    );
                }
            });
        canvas.render(area, buf);
    }

    /// Share labels placed inside the big slices.
    fn share_labels(&self) -> Vec<(f64, f64, String)> {
        let series = &self.config.series;
        slice_angles(series)
            .iter()
            .enumerate()
            .filter_map(|(index, (start, end))| {
                let fraction = series.fraction(index)?;
                if fraction < 0.05 {
                    return None;
                }
                let mid = (start + end) / 2.0;
                let r = if series.items[index].sliced {
                    0.62 + SLICE_OFFSET
                } else {
                    0.62
                };
                Some((
                    r * mid.cos(),
                    r * mid.sin(),
                    format!("{:.0}%", fraction * 100.0),
                ))
            })
            .collect()
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let series = &self.config.series;
        let name_width = series
            .items
            .iter()
            .map(|item| item.name.width())
            .max()
            .unwrap_or_default();

        let lines: Vec<Line> = series
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut name_style = Style::default();
                if item.selected {
                    name_style = name_style.add_modifier(Modifier::BOLD);
                }
                let mut line = Line::from(vec![
                    Span::styled("■ ", Style::default().fg(series_color(index))),
                    Span::styled(
                        format!("{:<name_width$} {:>5.1}%", item.name, item.y),
                        name_style,
                    ),
                ]);
                if self.focused && self.highlight == Some(index) {
                    line = line.style(self.highlight_style);
                }
                line
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
            .items
            .iter()
            .map(|item| item.name.width())
            .max()
            .unwrap_or_default();
        // marker + name + " 100.0%"
        (2 + name_width + 7) as u16
    }
}

impl Widget for PieChart<'_> {
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
        let series = &self.config.series;
        if series.is_empty() || series.total() <= 0.0 {
            return;
        }

        let legend_width = if self.config.plot_options.show_in_legend {
            self.legend_width().min(inner.width / 2)
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(legend_width)])
            .split(inner);

        self.render_pie(chunks[0], buf);
        if legend_width > 0 {
            self.render_legend(chunks[1], buf);
        }
    }
}

/// Start/end angle per slice, clockwise from twelve o'clock, in radians.
pub fn slice_angles(series: &DataSeries) -> Vec<(f64, f64)> {
    let total = series.total();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angles = Vec::with_capacity(series.len());
    let mut acc = 0.0;
    for item in &series.items {
        let start = FRAC_PI_2 - TAU * (acc / total);
        acc += item.y;
        let end = FRAC_PI_2 - TAU * (acc / total);
        angles.push((start, end));
    }
    angles
}

pub struct SlicePoints {
    pub index: usize,
    pub coords: Vec<(f64, f64)>,
}

/// Rasterize each slice into a point cloud for the braille canvas. Sliced
/// items are pushed out from the center along their mid-angle.
pub fn slice_points(
    series: &DataSeries,
    radius: f64,
    slice_offset: f64,
    step: f64,
) -> Vec<SlicePoints> {
    slice_angles(series)
        .iter()
        .enumerate()
        .map(|(index, (start, end))| {
            let item = &series.items[index];
            let mid = (start + end) / 2.0;
            let (cx, cy) = if item.sliced {
                (slice_offset * mid.cos(), slice_offset * mid.sin())
            } else {
                (0.0, 0.0)
            };

            let mut coords = Vec::new();
            let mut r = step;
            while r <= radius {
                let arc = (start - end) * r;
                let n = (arc / step).ceil().max(1.0) as usize;
                for k in 0..=n {
                    let angle = start - (start - end) * (k as f64 / n as f64);
                    coords.push((cx + r * angle.cos(), cy + r * angle.sin()));
                }
                r += step;
            }
            SlicePoints { index, coords }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::data::browser_market_shares;
    use crate::model::{DataSeriesItem, PlotOptionsPie};

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

    fn demo_config() -> ChartConfiguration {
        ChartConfiguration {
            title: Some("Browser market shares in January, 2018".to_string()),
            plot_options: PlotOptionsPie {
                allow_point_select: true,
                show_in_legend: true,
                ..Default::default()
            },
            series: browser_market_shares(),
        }
    }

    #[test]
    fn test_slice_angles_cover_the_circle() {
        let series = browser_market_shares();
        let angles = slice_angles(&series);
        assert_eq!(angles.len(), series.len());
        assert!((angles[0].0 - FRAC_PI_2).abs() < 1e-9);
        assert!((angles[angles.len() - 1].1 - (FRAC_PI_2 - TAU)).abs() < 1e-9);
        for pair in angles.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_slice_points_respect_slicing() {
        let mut series = DataSeries::new();
        series.add(DataSeriesItem::new("a", 1.0));
        let mut b = DataSeriesItem::new("b", 1.0);
        b.sliced = true;
        series.add(b);

        let slices = slice_points(&series, 1.0, 0.5, 0.1);
        assert_eq!(slices.len(), 2);
        assert!(!slices[0].coords.is_empty());

        // The sliced slice is displaced: its points center away from origin.
        let mean = |coords: &[(f64, f64)]| {
            let n = coords.len() as f64;
            let (sx, sy) = coords
                .iter()
                .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
            (sx / n, sy / n)
        };
        let (ax, _) = mean(&slices[0].coords);
        let (bx, _) = mean(&slices[1].coords);
        // Slice a spans the right half, slice b the left; b is pushed left.
        assert!(ax > 0.0);
        assert!(bx < ax - 0.4);
    }

    #[test]
    fn test_slice_points_of_empty_series() {
        let series = DataSeries::new();
        assert!(slice_points(&series, 1.0, 0.2, 0.1).is_empty());
    }

    #[test]
    fn test_render_shows_title_and_legend() {
        let config = demo_config();
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(PieChart::new(&config), f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Browser market shares in January, 2018"));
        assert!(text.contains("Chrome"));
        assert!(text.contains("61.4%"));
        assert!(text.contains("Others"));
    }

    #[test]
    fn test_render_without_legend() {
        let mut config = demo_config();
        config.plot_options.show_in_legend = false;
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(PieChart::new(&config), f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains("Chrome"));
    }

    #[test]
    fn test_render_empty_series_is_safe() {
        let config = ChartConfiguration::default();
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(PieChart::new(&config), f.area()))
            .unwrap();
    }

    #[test]
    fn test_render_into_tiny_area_is_safe() {
        let config = demo_config();
        let backend = TestBackend::new(8, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(PieChart::new(&config), f.area()))
            .unwrap();
    }
}
