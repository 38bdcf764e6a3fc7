//! Previewer state and logic

use crossterm::event::KeyEvent;
use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::i18n::Translator;
use crate::keys;
use crate::markup::Node;
use crate::page::Page;
use crate::ui::components::{empty_page_state, preview_block};
use crate::ui::markup::to_lines;
use crate::ui::widgets::render_status_bar;

/// Scrollable preview of one rendered page
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Page title shown in the border
    pub title: String,
    /// Rendered page content
    lines: Vec<Line<'static>>,
    /// Index of the first visible line
    pub scroll_offset: usize,
    /// Content rows visible in the last frame
    visible_height: usize,
}

impl App {
    /// Build a previewer for already rendered markup
    pub fn new(title: impl Into<String>, content: &Node) -> Self {
        Self {
            running: true,
            title: title.into(),
            lines: to_lines(content),
            scroll_offset: 0,
            visible_height: 0,
        }
    }

    /// Render `page` and build a previewer for it
    pub fn from_page(page: &Page, i18n: &dyn Translator) -> Self {
        Self::new(page.title(i18n), &page.render(i18n))
    }

    /// Number of rendered lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_interrupt(&key) {
            self.quit();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            code if keys::is_move_up(code) => self.scroll_up(1),
            code if keys::is_move_down(code) => self.scroll_down(1),
            keys::PAGE_UP => self.scroll_up(self.page_step()),
            keys::PAGE_DOWN => self.scroll_down(self.page_step()),
            keys::GO_TOP => self.scroll_offset = 0,
            keys::GO_BOTTOM => self.scroll_offset = self.max_offset(),
            _ => {}
        }
    }

    fn page_step(&self) -> usize {
        self.visible_height.max(1)
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.visible_height.max(1))
    }

    fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.max_offset());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }

    /// Position label like `1-20/57`
    fn position(&self) -> Option<String> {
        if self.lines.is_empty() {
            return None;
        }
        let first = self.scroll_offset + 1;
        let last = (self.scroll_offset + self.visible_height).min(self.lines.len());
        Some(format!("{first}-{last}/{}", self.lines.len()))
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Reserve space for status bar
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        self.visible_height = usize::from(main_area.height.saturating_sub(2));
        self.scroll_offset = self.scroll_offset.min(self.max_offset());

        let block = preview_block(&self.title, self.position());
        if self.lines.is_empty() {
            frame.render_widget(empty_page_state().block(block), main_area);
        } else {
            let offset = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
            frame.render_widget(
                Paragraph::new(self.lines.clone())
                    .block(block)
                    .scroll((offset, 0)),
                main_area,
            );
        }

        if area.height >= 2 {
            render_status_bar(frame, area, keys::PREVIEW_HINTS);
        }
    }
}
