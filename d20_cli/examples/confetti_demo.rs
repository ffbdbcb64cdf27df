//! Runs the confetti rain on a blank screen, no dice involved.
//!
//! ```sh
//! cargo run -p d20_cli --example confetti_demo
//! ```

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use d20_cli::ui::confetti_widget::ConfettiLayer;
use d20_cli::{ConfettiAnimation, ConfettiConfig, ConfettiTrigger, SpriteId};

#[tokio::main]
async fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut animation = ConfettiAnimation::new(ConfettiConfig::default());

    let size = terminal.size()?;
    animation.trigger(
        &ConfettiTrigger {
            sprites: vec![SpriteId::Confetti, SpriteId::CryingEmoji],
        },
        size.width as f32,
        size.height as f32,
    );

    let mut last_step = Instant::now();
    while animation.is_active() {
        terminal.draw(|f| f.render_widget(ConfettiLayer::new(&animation), f.area()))?;

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(());
                }
            }
        }

        let now = Instant::now();
        animation.step(now.duration_since(last_step));
        last_step = now;
        tokio::time::sleep(Duration::from_millis(16)).await;
    }
    Ok(())
}
