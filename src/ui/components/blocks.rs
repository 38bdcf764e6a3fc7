//! Block components for UI rendering

use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::ui::theme;

/// Bordered block with the page title on the left and the scroll position on the right
pub fn preview_block(title: &str, position: Option<String>) -> Block<'static> {
    let title = Line::from(vec![
        Span::raw(" mbview - ").bold(),
        Span::styled(title.to_string(), Style::default().fg(theme::preview::TITLE)),
        Span::raw(" "),
    ]);
    let block = Block::default().borders(Borders::ALL).title(title);

    match position {
        Some(position) => block.title(
            Line::from(Span::styled(
                format!(" {position} "),
                Style::default().fg(theme::preview::POSITION),
            ))
            .right_aligned(),
        ),
        None => block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_block_with_position() {
        let _block = preview_block("Edit label - Warp", Some("1-10/20".to_string()));
    }

    #[test]
    fn test_preview_block_without_position() {
        let _block = preview_block("Search Results", None);
    }
}
