use std::thread;
use std::time::{Duration, Instant};

use ratatui::{Terminal, backend::TestBackend};

use crate::catalog::{AppRow, CatalogSource, FetchError};
use crate::ui::App;

struct FixedSource {
    apps: Vec<AppRow>,
}

impl CatalogSource for FixedSource {
    fn fetch(&self) -> Result<Vec<AppRow>, FetchError> {
        Ok(self.apps.clone())
    }
}

struct BrokenSource;

impl CatalogSource for BrokenSource {
    fn fetch(&self) -> Result<Vec<AppRow>, FetchError> {
        Err(FetchError::Status(503))
    }
}

fn settle(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while app.loader.is_in_flight() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
        app.pump_load_results();
    }
    app.pump_load_results();
}

fn render_to_string(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn initial_render_shows_the_full_catalog() {
    let mut app = App::new(FixedSource {
        apps: vec![AppRow::new("alpha", "/a"), AppRow::new("beta", "/b")],
    });
    app.set_input_title("Apps");
    app.hydrate_initial_catalog();
    settle(&mut app);

    let view = render_to_string(&mut app);

    assert!(view.contains("Apps"), "prompt title missing:\n{view}");
    assert!(view.contains("alpha"), "first record missing:\n{view}");
    assert!(view.contains("beta"), "second record missing:\n{view}");
}

#[test]
fn failed_load_renders_the_empty_message() {
    let mut app = App::new(BrokenSource);
    app.hydrate_initial_catalog();
    settle(&mut app);

    let view = render_to_string(&mut app);

    assert!(view.contains("No results"), "empty message missing:\n{view}");
}
