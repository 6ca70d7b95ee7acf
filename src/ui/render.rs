use frizbee::Config;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    widgets::{Clear, Paragraph},
};

use super::App;
use super::components::{InputContext, ProgressState, TablePane, render_input_line, render_table};
use crate::search;

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let area = area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        let (progress_text, progress_complete) = self.progress_status();
        let input_ctx = InputContext {
            search_input: &self.search_input,
            input_title: self.input_title.as_deref(),
            area: layout[0],
            theme: &self.theme,
        };
        let progress_state = ProgressState {
            progress_text: &progress_text,
            progress_complete,
            throbber_state: &self.throbber_state,
        };
        render_input_line(frame, input_ctx, progress_state);

        let results_area = layout[1];
        let highlight_owned = self.highlight_for_query();
        let highlight_state = highlight_owned
            .as_ref()
            .map(|(text, config)| (text.as_str(), config));
        render_table(
            frame,
            results_area,
            &mut self.table_state,
            highlight_state,
            TablePane {
                filtered: &self.display.filtered,
                scores: &self.display.scores,
                apps: &self.cached,
                headers: self.headers.as_ref(),
            },
            &self.theme,
        );

        if self.displayed_len() == 0 {
            let mut message_area = results_area;
            const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
            if message_area.height > HEADER_AND_DIVIDER_HEIGHT {
                message_area.y += HEADER_AND_DIVIDER_HEIGHT;
                message_area.height -= HEADER_AND_DIVIDER_HEIGHT;

                let empty = Paragraph::new("No results")
                    .alignment(Alignment::Center)
                    .style(self.theme.empty_style());
                frame.render_widget(Clear, message_area);
                frame.render_widget(empty, message_area);
            }
        }
    }

    fn progress_status(&self) -> (String, bool) {
        if self.loader.is_in_flight() {
            ("Fetching apps".to_string(), false)
        } else if self.cached.is_empty() {
            (String::new(), true)
        } else {
            (format!("{} apps", self.cached.len()), true)
        }
    }

    fn highlight_for_query(&self) -> Option<(String, Config)> {
        let query = self.search_input.text().trim();
        if query.is_empty() {
            return None;
        }
        let config = search::config_for_query(query, self.cached.len());
        Some((query.to_string(), config))
    }
}
