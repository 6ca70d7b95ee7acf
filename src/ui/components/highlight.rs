use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Cell;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Build a table cell that highlights matching indices within `text`.
///
/// The text is truncated from the right when it exceeds `max_width`; match
/// indices that fall into the truncated tail are dropped rather than drawn on
/// the ellipsis.
pub(crate) fn highlight_cell(
    text: &str,
    indices: Option<Vec<usize>>,
    max_width: Option<u16>,
    highlight_style: Style,
) -> Cell<'_> {
    let (display_text, indices) = if let Some(width) = max_width.map(usize::from) {
        truncate_with_highlight(text, indices, width)
    } else {
        (text.to_string(), indices)
    };

    let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
        return Cell::from(display_text);
    };
    sorted_indices.sort_unstable();
    let mut next = sorted_indices.into_iter().peekable();
    let mut buffer = String::new();
    let mut highlighted = false;
    let mut spans = Vec::new();

    for (idx, ch) in display_text.chars().enumerate() {
        let should_highlight = next.peek().copied() == Some(idx);
        if should_highlight {
            next.next();
        }
        if should_highlight != highlighted {
            if !buffer.is_empty() {
                let style = if highlighted {
                    highlight_style
                } else {
                    Style::default()
                };
                spans.push(Span::styled(mem::take(&mut buffer), style));
            }
            highlighted = should_highlight;
        }
        buffer.push(ch);
    }

    if !buffer.is_empty() {
        let style = if highlighted {
            highlight_style
        } else {
            Style::default()
        };
        spans.push(Span::styled(buffer, style));
    }

    Cell::from(Text::from(Line::from(spans)))
}

fn truncate_with_highlight(
    text: &str,
    indices: Option<Vec<usize>>,
    max_width: usize,
) -> (String, Option<Vec<usize>>) {
    if max_width == 0 {
        return (String::new(), None);
    }

    let original_width = text.width();
    if original_width <= max_width {
        return (text.to_string(), indices);
    }

    let ellipsis = "…";
    let ellipsis_width = ellipsis.width();
    if max_width <= ellipsis_width {
        return (ellipsis.to_string(), None);
    }

    let available = max_width - ellipsis_width;
    let (slice, _) = text.unicode_truncate(available);
    let mut truncated = slice.to_string();
    truncated.push_str(ellipsis);
    let limit = slice.chars().count();
    let indices = indices.and_then(|indices| {
        let adjusted: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
        (!adjusted.is_empty()).then_some(adjusted)
    });
    (truncated, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_leading_indices() {
        let (text, indices) = truncate_with_highlight("abcdefgh", Some(vec![1, 3, 6]), 5);
        assert_eq!(text, "abcd…");
        assert_eq!(indices, Some(vec![1, 3]));
    }

    #[test]
    fn short_text_is_left_alone() {
        let (text, indices) = truncate_with_highlight("abc", Some(vec![0]), 5);
        assert_eq!(text, "abc");
        assert_eq!(indices, Some(vec![0]));
    }

    #[test]
    fn zero_width_yields_an_empty_cell() {
        let (text, indices) = truncate_with_highlight("abc", Some(vec![0]), 0);
        assert_eq!(text, "");
        assert_eq!(indices, None);
    }
}
