use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::{App, BrowseOutcome};

impl App<'_> {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
        match key.code {
            KeyCode::Esc => {
                return Ok(Some(BrowseOutcome {
                    accepted: false,
                    selection: None,
                    query: self.search_input.text().to_string(),
                }));
            }
            KeyCode::Enter => {
                let selection = self.current_selection();
                return Ok(Some(BrowseOutcome {
                    accepted: true,
                    selection,
                    query: self.search_input.text().to_string(),
                }));
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            // There is no second pane to cycle to; swallow Tab so it does not
            // end up in the query text.
            KeyCode::Tab => {}
            _ => {
                if self.search_input.input(key) {
                    let query = self.search_input.text().trim().to_string();
                    if !query.is_empty() {
                        self.filter_by_name(&query);
                    }
                }
            }
        }
        Ok(None)
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            let len = self.displayed_len();
            if selected + 1 < len {
                self.table_state.select(Some(selected + 1));
            }
        }
    }
}
