use frizbee::Config;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use super::highlight::highlight_cell;
use crate::catalog::AppRow;
use crate::search;
use crate::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// Data backing the results table for one frame.
pub(crate) struct TablePane<'a> {
    pub(crate) filtered: &'a [usize],
    pub(crate) scores: &'a [u16],
    pub(crate) apps: &'a [AppRow],
    pub(crate) headers: Option<&'a Vec<String>>,
}

pub(crate) fn render_table(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    highlight_state: Option<(&str, &Config)>,
    pane: TablePane<'_>,
    theme: &Theme,
) {
    let highlight_spacing = HighlightSpacing::WhenSelected;
    let selection_width = selection_column_width(table_state, &highlight_spacing);
    let widths = column_constraints();
    let column_widths = resolve_column_widths(area, &widths, selection_width, TABLE_COLUMN_SPACING);
    let rows = build_app_rows(
        pane.filtered,
        pane.scores,
        pane.apps,
        highlight_state,
        Some(&column_widths),
        theme.highlight_style(),
    );
    let headers = pane.headers.cloned().unwrap_or_else(default_headers);

    let header_cells = headers.into_iter().map(Cell::from).collect::<Vec<_>>();
    let header = Row::new(header_cells)
        .style(theme.header_style())
        .height(1)
        .bottom_margin(1);

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(highlight_spacing)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, table_state);

    render_header_separator(frame, area, theme, 1);
}

fn column_constraints() -> Vec<Constraint> {
    vec![Constraint::Fill(1), Constraint::Length(8)]
}

fn default_headers() -> Vec<String> {
    vec!["App".into(), "Score".into()]
}

/// Build one table row per displayed catalog index.
#[must_use]
pub(crate) fn build_app_rows<'a>(
    filtered: &'a [usize],
    scores: &'a [u16],
    apps: &'a [AppRow],
    highlight_state: Option<(&'a str, &'a Config)>,
    column_widths: Option<&[u16]>,
    highlight_style: Style,
) -> Vec<Row<'a>> {
    filtered
        .iter()
        .enumerate()
        .filter_map(|(idx, &actual_index)| {
            let app = apps.get(actual_index)?;
            let score = scores.get(idx).copied().unwrap_or_default();
            let name_highlight = highlight_state
                .and_then(|(needle, config)| search::highlight_for(needle, config, &app.name));
            // Leave one column of slack so the cell never touches the edge.
            let name_width = column_widths
                .and_then(|widths| widths.first().copied())
                .map(|width| width.saturating_sub(1));
            Some(Row::new([
                highlight_cell(&app.name, name_highlight, name_width, highlight_style),
                Cell::from(score.to_string()),
            ]))
        })
        .collect()
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
    if header_height >= area.height {
        return;
    }
    let sep_y = area.y + header_height;
    if sep_y >= area.y + area.height {
        return;
    }

    let width = area.width as usize;
    if width == 0 {
        return;
    }

    let sep_rect = Rect {
        x: area.x,
        y: sep_y,
        width: area.width,
        height: 1,
    };
    let header_bg = theme.header_bg();
    let base_style = Style::new().bg(header_bg);
    if width <= 2 {
        let line = " ".repeat(width);
        let para = Paragraph::new(line).style(base_style);
        frame.render_widget(para, sep_rect);
        return;
    }

    let middle = "─".repeat(width - 2);
    let middle_style = Style::new().bg(header_bg).fg(theme.header_fg());
    let middle_span = Span::styled(middle, middle_style);
    let spans = vec![
        Span::styled(" ", base_style),
        middle_span,
        Span::styled(" ", base_style),
    ];
    let para = Paragraph::new(Text::from(Line::from(spans)));
    frame.render_widget(para, sep_rect);
}

fn selection_column_width(state: &TableState, spacing: &HighlightSpacing) -> u16 {
    let has_selection = state.selected().is_some();
    let should_add = match spacing {
        HighlightSpacing::Always => true,
        HighlightSpacing::WhenSelected => has_selection,
        HighlightSpacing::Never => false,
    };
    if should_add {
        UnicodeWidthStr::width(HIGHLIGHT_SYMBOL) as u16
    } else {
        0
    }
}

fn resolve_column_widths(
    area: Rect,
    constraints: &[Constraint],
    selection_width: u16,
    column_spacing: u16,
) -> Vec<u16> {
    if constraints.is_empty() {
        return Vec::new();
    }

    let layout_area = Rect {
        x: 0,
        y: 0,
        width: area.width,
        height: 1,
    };
    let [_, columns_area] =
        Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)])
            .areas(layout_area);

    Layout::horizontal(constraints.to_vec())
        .spacing(column_spacing)
        .split(columns_area)
        .iter()
        .map(|rect| rect.width)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_rect() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 10,
        }
    }

    #[test]
    fn rows_follow_the_filtered_order() {
        let apps = vec![AppRow::new("alpha", "/a"), AppRow::new("beta", "/b")];
        let filtered = vec![1usize, 0usize];
        let scores = vec![42u16, 7u16];

        let rows = build_app_rows(&filtered, &scores, &apps, None, None, Style::default());

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let apps = vec![AppRow::new("alpha", "/a")];
        let filtered = vec![0usize, 9usize];
        let scores = vec![1u16, 1u16];

        let rows = build_app_rows(&filtered, &scores, &apps, None, None, Style::default());

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn column_widths_account_for_the_selection_gutter() {
        let widths = resolve_column_widths(mock_rect(), &column_constraints(), 2, 1);
        assert_eq!(widths.len(), 2);
        assert!(widths[0] > 0);
        assert_eq!(widths[1], 8);
    }
}
