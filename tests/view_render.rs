use maptui::{
    action::Action,
    components::{Component, Home, StatusBar},
};
use ratatui::{backend::TestBackend, Terminal};

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

/// Render the whole view the way the app loop does: every component draws
/// into the full frame and carves out its own region.
fn render_view(home: &mut Home, status_bar: &mut StatusBar) -> String {
    let backend = TestBackend::new(100, 35);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            home.draw(f, f.area()).unwrap();
            status_bar.draw(f, f.area()).unwrap();
        })
        .unwrap();
    buffer_text(&terminal)
}

#[test]
fn test_both_widgets_render_in_a_vertical_stack() {
    let mut home = Home::new();
    let mut status_bar = StatusBar::new();
    let text = render_view(&mut home, &mut status_bar);

    let map_line = text
        .lines()
        .position(|line| line.contains("Europe time zones"))
        .expect("map title");
    let chart_line = text
        .lines()
        .position(|line| line.contains("Browser market shares in January, 2018"))
        .expect("chart title");
    assert!(map_line < chart_line, "map renders above the chart");

    // Map legend and labels.
    assert!(text.contains("UTC + 2"));
    assert!(text.contains("FR"));
    // Chart legend.
    assert!(text.contains("Chrome"));
    assert!(text.contains("Internet Explorer"));
    // Status line hints.
    assert!(text.contains("q quit"));
}

#[test]
fn test_status_bar_shows_the_tooltip_messages() {
    let mut home = Home::new();
    let mut status_bar = StatusBar::new();

    let action = home.update(Action::NextPoint).unwrap().expect("tooltip");
    status_bar.update(action).unwrap();

    let text = render_view(&mut home, &mut status_bar);
    assert!(text.contains("Iceland: UTC"));
}

#[test]
fn test_hidden_series_disappears_from_the_view() {
    let mut home = Home::new();
    let mut status_bar = StatusBar::new();

    let before = render_view(&mut home, &mut status_bar);
    assert!(before.contains("GB"));

    home.update(Action::TogglePoint).unwrap();
    let after = render_view(&mut home, &mut status_bar);
    assert!(!after.contains("GB"));
    assert!(after.contains("FR"));
}
