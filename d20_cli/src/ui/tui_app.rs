use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

use d20_core::utils::debug::is_debug_enabled;
use d20_core::utils::time::relative_time;
use d20_core::{
    roll_d20, ConfettiAnimation, ConfettiConfig, ConfettiService, ConfettiTrigger, DieRoll,
    RollStats, Verdict,
};

use crate::ui::confetti_widget::ConfettiLayer;
use crate::ui::die::{die_art, tumble_face};
use crate::ui::throttle::Throttle;

/// Minimum time between rolls, the original app's 5s spacebar throttle.
const ROLL_COOLDOWN: Duration = Duration::from_secs(5);
/// How long the die tumbles before the rolled face settles.
const TUMBLE_TIME: Duration = Duration::from_millis(900);
/// Target redraw interval, roughly one display refresh.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// How long the "next roll in Ns" hint stays up after a swallowed press.
const HINT_TIME: Duration = Duration::from_millis(1500);

/// Application state (separate from the terminal for the borrow checker).
struct AppState {
    stats: RollStats,
    persist_stats: bool,
    session_rolls: u64,
    /// The settled roll currently on screen, if any.
    roll: Option<DieRoll>,
    show_text: bool,
    /// Roll decided at keypress, revealed when the tumble ends.
    pending: Option<DieRoll>,
    tumbling_until: Option<Instant>,
    throttle: Throttle,
    last_denied: Option<Instant>,
    confetti: ConfettiAnimation,
    service: ConfettiService,
    triggers: UnboundedReceiver<ConfettiTrigger>,
    frame: usize,
    last_frame_advance: Instant,
    last_step: Instant,
    screen_width: u16,
    screen_height: u16,
}

impl AppState {
    fn new(config: ConfettiConfig, stats: RollStats, persist_stats: bool) -> Self {
        let (service, triggers) = ConfettiService::channel();
        Self {
            stats,
            persist_stats,
            session_rolls: 0,
            roll: None,
            show_text: false,
            pending: None,
            tumbling_until: None,
            throttle: Throttle::new(ROLL_COOLDOWN),
            last_denied: None,
            confetti: ConfettiAnimation::new(config),
            service,
            triggers,
            frame: 0,
            last_frame_advance: Instant::now(),
            last_step: Instant::now(),
            screen_width: 0,
            screen_height: 0,
        }
    }

    /// Spacebar handler: start a tumble unless one is running or the
    /// cooldown swallows the press.
    fn request_roll(&mut self) {
        if self.tumbling_until.is_some() {
            return;
        }
        if !self.throttle.try_fire() {
            self.last_denied = Some(Instant::now());
            return;
        }
        // The outcome is fixed now; the tumble is pure theater.
        self.pending = Some(roll_d20());
        self.tumbling_until = Some(Instant::now() + TUMBLE_TIME);
        self.show_text = false;
        self.roll = None;
    }

    /// Reveal the pending roll: count it, persist the counter and fire the
    /// confetti trigger for the verdict's sprites.
    fn settle(&mut self) {
        self.tumbling_until = None;
        let Some(roll) = self.pending.take() else {
            return;
        };
        tracing::debug!(value = roll.value, "roll settled");

        self.roll = Some(roll);
        self.show_text = true;
        self.session_rolls += 1;
        self.stats.record_roll();
        if self.persist_stats {
            if let Err(err) = self.stats.save() {
                tracing::warn!(%err, "failed to save roll stats");
            }
        }

        let sprites = roll.verdict.sprites();
        if !sprites.is_empty() {
            // Receiver lives in this struct, so this cannot fail in practice.
            let _ = self.service.trigger(sprites.to_vec());
        }
    }

    /// Per-loop bookkeeping: frame counter, tumble settling, trigger
    /// draining and the confetti step.
    fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_frame_advance) >= Duration::from_millis(80) {
            self.frame = self.frame.wrapping_add(1);
            self.last_frame_advance = now;
        }

        if let Some(until) = self.tumbling_until {
            if now >= until {
                self.settle();
            }
        }

        let (width, height) = (self.screen_width as f32, self.screen_height as f32);
        while let Ok(trigger) = self.triggers.try_recv() {
            self.confetti.trigger(&trigger, width, height);
        }

        let dt = now.duration_since(self.last_step);
        self.last_step = now;
        self.confetti.step(dt);
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_die(f, chunks[1]);
        self.render_footer(f, chunks[2]);

        // Confetti rains over everything, like the full-window canvas
        // overlay in the original.
        f.render_widget(ConfettiLayer::new(&self.confetti), f.area());
    }

    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(40)])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " d20 — roll for your day",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, halves[0]);

        let mut stats = format!(
            "session {} · lifetime {}",
            self.session_rolls, self.stats.lifetime_rolls
        );
        if let Some(last) = self.stats.last_roll {
            stats.push_str(&format!(" · {}", relative_time(last)));
        }
        let stats = Paragraph::new(Line::from(Span::styled(
            stats,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);
        f.render_widget(stats, halves[1]);
    }

    fn render_die(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines: Vec<Line> = Vec::new();

        if self.tumbling_until.is_some() {
            let face = tumble_face(self.frame);
            for art in die_art(face) {
                lines.push(Line::from(Span::styled(
                    art,
                    Style::default().fg(Color::Cyan),
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "rolling...",
                Style::default().fg(Color::DarkGray),
            )));
        } else if let Some(roll) = self.roll {
            let color = verdict_color(roll.verdict);
            for art in die_art(roll.value) {
                lines.push(Line::from(Span::styled(art, Style::default().fg(color))));
            }
            lines.push(Line::default());
            if self.show_text {
                lines.push(Line::from(Span::styled(
                    roll.verdict.message(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "Press SPACE to roll the die",
                Style::default().fg(Color::DarkGray),
            )));
        }

        // Center the block vertically inside the available space.
        let content_height = lines.len() as u16;
        let centered = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(content_height),
                Constraint::Fill(1),
            ])
            .split(area)[1];

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered,
        );
    }

    fn render_footer(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut spans = vec![Span::styled(
            " SPACE roll · q quit",
            Style::default().fg(Color::DarkGray),
        )];

        let hint_active = self
            .last_denied
            .is_some_and(|at| at.elapsed() < HINT_TIME);
        if hint_active {
            if let Some(remaining) = self.throttle.remaining() {
                spans.push(Span::styled(
                    format!("  —  easy there, next roll in {}s", remaining.as_secs() + 1),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }

        if is_debug_enabled() {
            spans.push(Span::styled(
                format!(
                    "  [{:?}: {} particles]",
                    self.confetti.phase(),
                    self.confetti.particles().len()
                ),
                Style::default().fg(Color::DarkGray),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::CriticalSuccess => Color::Magenta,
        Verdict::VeryProductive => Color::Green,
        Verdict::GoodDay => Color::LightGreen,
        Verdict::Mid => Color::Gray,
        Verdict::Unmotivated => Color::Yellow,
        Verdict::VeryUnmotivated => Color::LightRed,
        Verdict::CriticalFail => Color::Red,
    }
}

/// Fullscreen TUI wrapping the roll loop.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
}

impl TuiApp {
    pub fn new(config: ConfettiConfig, persist_stats: bool) -> Result<Self> {
        let stats = if persist_stats {
            RollStats::load()
        } else {
            RollStats::default()
        };

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: AppState::new(config, stats, persist_stats),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            if let Ok((w, h)) = terminal::size() {
                self.state.screen_width = w;
                self.state.screen_height = h;
                self.state.confetti.resize(w as f32, h as f32);
            }

            self.terminal.draw(|f| self.state.render(f))?;

            // Drain all pending key events, then yield to the runtime until
            // the next frame.
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char(' ') => self.state.request_roll(),
                        _ => {}
                    }
                }
            }

            self.state.tick();
            tokio::time::sleep(FRAME_INTERVAL).await;
        }
    }

    /// Snapshot for the farewell message printed after the TUI exits.
    pub fn summary(&self) -> (RollStats, u64) {
        (self.state.stats.clone(), self.state.session_rolls)
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use d20_core::SpriteId;

    fn test_state() -> AppState {
        let mut state = AppState::new(ConfettiConfig::default(), RollStats::default(), false);
        state.screen_width = 80;
        state.screen_height = 24;
        state
    }

    #[tokio::test]
    async fn test_request_roll_starts_tumble_once() {
        let mut state = test_state();
        state.request_roll();
        assert!(state.tumbling_until.is_some());
        assert!(state.pending.is_some());

        // Second press during the cooldown is swallowed.
        let pending = state.pending;
        state.tumbling_until = None;
        state.request_roll();
        assert_eq!(state.pending.map(|r| r.value), pending.map(|r| r.value));
        assert!(state.last_denied.is_some());
    }

    #[tokio::test]
    async fn test_settle_counts_roll_and_shows_text() {
        let mut state = test_state();
        state.pending = Some(DieRoll::from_value(10));
        state.settle();

        assert_eq!(state.session_rolls, 1);
        assert_eq!(state.stats.lifetime_rolls, 1);
        assert!(state.show_text);
        assert_eq!(state.roll.map(|r| r.value), Some(10));
        // A mid roll sends no confetti trigger.
        assert!(state.triggers.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_settle_triggers_confetti_at_extremes() {
        let mut state = test_state();
        state.pending = Some(DieRoll::from_value(20));
        state.settle();
        let trigger = state.triggers.try_recv().unwrap();
        assert_eq!(trigger.sprites, vec![SpriteId::Confetti]);

        state.pending = Some(DieRoll::from_value(1));
        state.settle();
        let trigger = state.triggers.try_recv().unwrap();
        assert_eq!(trigger.sprites, vec![SpriteId::CryingEmoji]);
    }

    #[tokio::test]
    async fn test_tick_starts_animation_from_trigger() {
        let mut state = test_state();
        state.pending = Some(DieRoll::from_value(20));
        state.settle();

        state.tick();
        assert!(state.confetti.is_active());
    }

    #[tokio::test]
    async fn test_tumble_settles_after_deadline() {
        let mut state = test_state();
        state.pending = Some(DieRoll::from_value(15));
        state.tumbling_until = Some(Instant::now() - Duration::from_millis(1));
        state.tick();
        assert!(state.tumbling_until.is_none());
        assert!(state.roll.is_some());
    }
}
