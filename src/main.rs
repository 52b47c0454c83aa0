mod app;
mod domain;
mod input;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "taska")]
#[command(about = "A minimal terminal to-do list with due dates, priorities, and light/dark themes", long_about = None)]
struct Cli {
    /// Use plain ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = AppState::new(!cli.ascii);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // All state lives in memory and only changes on key presses, so a
        // blocking read is enough — no tick timer needed
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press {
                let should_quit = input::handle_key(app, key)?;
                if should_quit {
                    return Ok(());
                }
            }
        }
    }
}
