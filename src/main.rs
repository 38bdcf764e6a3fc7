//! mbview - MusicBrainz page previewer
//!
//! Binary entry point: renders a page document as HTML or in the terminal.

use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use mbview::app::App;
use mbview::cli::Cli;
use mbview::i18n::Untranslated;
use mbview::logging::init_logging;
use mbview::markup::to_html;
use mbview::page::Page;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(&cli.log_config())?;

    let page = Page::from_path(&cli.page)?;

    if cli.html {
        println!("{}", to_html(&page.render(&Untranslated)));
        return Ok(());
    }

    let app = App::from_page(&page, &Untranslated);
    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the previewer's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }
    Ok(())
}

/// Handle crossterm events.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
