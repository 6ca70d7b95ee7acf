use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme::Theme;
use crate::ui::input::SearchInput;

/// Argument bundle for rendering the input row.
pub(crate) struct InputContext<'a> {
    pub(crate) search_input: &'a SearchInput<'a>,
    pub(crate) input_title: Option<&'a str>,
    pub(crate) area: Rect,
    pub(crate) theme: &'a Theme,
}

/// Progress information for the indicator at the right edge of the row.
pub(crate) struct ProgressState<'a> {
    pub(crate) progress_text: &'a str,
    pub(crate) progress_complete: bool,
    pub(crate) throbber_state: &'a ThrobberState,
}

/// Render the prompt, the query editor and the progress indicator on one row.
pub(crate) fn render_input_line(
    frame: &mut Frame,
    input: InputContext<'_>,
    progress: ProgressState<'_>,
) {
    let InputContext {
        search_input,
        input_title,
        area,
        theme,
    } = input;
    let ProgressState {
        progress_text,
        progress_complete,
        throbber_state,
    } = progress;

    let prompt = input_title.unwrap_or("");
    let prompt_width = calculate_prompt_width(prompt);
    let constraints = layout_constraints(!prompt.is_empty(), prompt_width);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    if !prompt.is_empty() {
        let prompt_text = format!("{prompt} > ");
        let prompt_widget = Paragraph::new(prompt_text).style(theme.prompt_style());
        frame.render_widget(prompt_widget, horizontal[0]);
    }

    let input_index = if prompt.is_empty() { 0 } else { 1 };
    let input_area = horizontal[input_index];
    search_input.render_textarea(frame, input_area);
    render_progress(
        frame,
        input_area,
        progress_text,
        progress_complete,
        throbber_state,
        theme,
    );
}

fn calculate_prompt_width(prompt: &str) -> u16 {
    if prompt.is_empty() {
        0
    } else {
        prompt.len() as u16 + 3
    }
}

fn layout_constraints(has_prompt: bool, prompt_width: u16) -> Vec<Constraint> {
    if has_prompt {
        vec![Constraint::Length(prompt_width), Constraint::Min(1)]
    } else {
        vec![Constraint::Min(1)]
    }
}

/// Draw the progress line right-aligned inside the input row, never writing
/// over text the user typed.
fn render_progress(
    frame: &mut Frame,
    area: Rect,
    progress_text: &str,
    progress_complete: bool,
    throbber_state: &ThrobberState,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 || progress_text.is_empty() {
        return;
    }

    let muted_style = theme.empty_style();
    let label_span = Span::styled(progress_text.to_string(), muted_style);
    let mut line = Line::default();
    if !progress_complete {
        let spinner = Throbber::default()
            .style(muted_style)
            .throbber_style(muted_style);
        let spinner_span = spinner.to_symbol_span(throbber_state);
        line.spans.push(spinner_span);
    }
    line.spans.push(label_span);

    let line_width = line.width() as u16;
    if line_width == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    let mut start_x = if line_width >= area.width {
        area.left()
    } else {
        area.right().saturating_sub(line_width)
    };

    let input_row = area.top();
    let mut last_char_x: Option<u16> = None;
    for x in area.left()..area.right() {
        if let Some(cell) = buffer.cell((x, input_row))
            && !cell.symbol().trim().is_empty()
        {
            last_char_x = Some(x);
        }
    }

    if let Some(last_x) = last_char_x {
        let min_start = last_x.saturating_add(3);
        if min_start > start_x {
            start_x = min_start;
        }
    }

    if start_x >= area.right() {
        return;
    }

    let max_width = area
        .right()
        .saturating_sub(start_x)
        .min(line_width)
        .min(area.width);

    if max_width == 0 {
        return;
    }

    buffer.set_line(start_x, input_row, &line, max_width);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn prompt_width_accounts_for_separator() {
        assert_eq!(calculate_prompt_width(""), 0);
        assert_eq!(calculate_prompt_width("Apps"), 7);
    }

    #[test]
    fn layout_constraints_include_prompt_section() {
        let constraints = layout_constraints(true, 5);
        assert_eq!(constraints.len(), 2);
        assert!(matches!(constraints[0], Constraint::Length(5)));
        assert!(matches!(constraints[1], Constraint::Min(1)));

        let constraints = layout_constraints(false, 5);
        assert_eq!(constraints.len(), 1);
        assert!(matches!(constraints[0], Constraint::Min(1)));
    }

    #[test]
    fn rendering_the_input_line_populates_the_buffer() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        let input = SearchInput::new("hello");
        let theme = Theme::default();
        let throbber_state = ThrobberState::default();

        terminal
            .draw(|frame| {
                let context = InputContext {
                    search_input: &input,
                    input_title: Some("Apps"),
                    area: frame.area(),
                    theme: &theme,
                };
                let progress = ProgressState {
                    progress_text: "2 apps",
                    progress_complete: true,
                    throbber_state: &throbber_state,
                };
                render_input_line(frame, context, progress);
            })
            .expect("render frame");

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let first_row = buffer
            .content
            .chunks(width)
            .next()
            .expect("first row available");
        let rendered: String = first_row.iter().map(|cell| cell.symbol()).collect();

        assert!(rendered.contains("Apps"));
        assert!(rendered.contains("hello"));
        assert!(rendered.contains("2 apps"));
    }
}
