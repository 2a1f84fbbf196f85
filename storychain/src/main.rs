//! StoryChain terminal client.
//!
//! A collaborative-fiction TUI: post a story opener, browse what others
//! have started, append continuations, and vote the best ones up.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for
//! scripted sessions and automated testing:
//!
//! ```bash
//! cargo run -p storychain -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};

use app::App;
use events::{handle_event, EventResult};
use story_core::UserContext;
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let user = UserContext::from_env();

    if args.iter().any(|a| a == "--headless") {
        headless::run_headless(user)?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(user));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if handle_event(&mut app, event::read()?) == EventResult::Quit {
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("StoryChain - collaborative storytelling in the terminal");
    println!();
    println!("USAGE:");
    println!("  storychain [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help    Show this help message");
    println!("  --headless    Run the line-oriented interface instead of the TUI");
    println!();
    println!("KEYS:");
    println!("  n             New story composer");
    println!("  b             Browse stories");
    println!("  i / Esc       Enter / leave insert mode");
    println!("  Enter         Post story, open story, or submit continuation");
    println!("  u / d         Vote the selected continuation up / down");
    println!("  ?             Help overlay");
    println!("  q             Quit");
    println!();
    println!("ENVIRONMENT:");
    println!("  STORYCHAIN_USER   Username for the session (default: user123)");
}
