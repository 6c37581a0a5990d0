//! TUI application state and event loop
//!
//! The app wraps the game session with presentation-only state: the
//! in-flight reveal timeline, the flipping tile, and the transient toast
//! and row-shake notices. All of it is driven by a timestamp passed into
//! [`App::tick`], so the whole layer runs under test without a terminal
//! or real delays.

use crate::game::{Phase, Reject, RevealSchedule, RevealStep, Session, SubmitResult};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a toast stays up
const TOAST_DURATION: Duration = Duration::from_millis(1600);
/// How long a rejected row shakes
const SHAKE_DURATION: Duration = Duration::from_millis(600);
/// Event poll interval; also the animation tick
const TICK: Duration = Duration::from_millis(33);

/// Transient message with its expiry
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    deadline: Instant,
}

/// A reveal in flight: the precomputed timeline plus its start instant
struct ActiveReveal {
    schedule: RevealSchedule,
    started: Instant,
}

/// Application state
pub struct App {
    pub session: Session,
    reveal: Option<ActiveReveal>,
    flipping: Option<usize>,
    toast: Option<Toast>,
    shake: Option<(usize, Instant)>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            reveal: None,
            flipping: None,
            toast: None,
            shake: None,
            should_quit: false,
        };

        if app.session.pool().used_fallback() {
            app.show_toast("Word lists not found; using fallback words.", Instant::now());
        }
        app
    }

    /// Current toast text, if one is up
    #[must_use]
    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.text.as_str())
    }

    /// Row currently shaking, if any
    #[must_use]
    pub fn shaking_row(&self) -> Option<usize> {
        self.shake.map(|(row, _)| row)
    }

    /// Column mid-flip, if the reveal animation is running
    #[must_use]
    pub const fn flipping_col(&self) -> Option<usize> {
        self.flipping
    }

    fn show_toast(&mut self, text: &str, now: Instant) {
        // A new toast supersedes the previous one, never stacks
        self.toast = Some(Toast {
            text: text.to_string(),
            deadline: now + TOAST_DURATION,
        });
    }

    fn shake_row(&mut self, row: usize, now: Instant) {
        self.shake = Some((row, now + SHAKE_DURATION));
    }

    /// Handle one normalized key event
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Enter => {
                if self.session.round().phase() == Phase::Locked {
                    self.new_round();
                } else {
                    self.submit(now);
                }
            }
            KeyCode::Char(c) => self.session.type_letter(c),
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.session.submit() {
            SubmitResult::Ignored => {}
            SubmitResult::Rejected(Reject::NotEnoughLetters) => {
                self.show_toast("Not enough letters", now);
            }
            SubmitResult::Rejected(Reject::NotInWordList) => {
                let (row, _) = self.session.round().cursor();
                self.shake_row(row, now);
                self.show_toast("Not in word list", now);
            }
            SubmitResult::Accepted(_) => {
                self.reveal = Some(ActiveReveal {
                    schedule: RevealSchedule::new(),
                    started: now,
                });
            }
        }
    }

    /// Start a fresh round, dropping any pending animation and notices
    pub fn new_round(&mut self) {
        self.session.start_round();
        self.reveal = None;
        self.flipping = None;
        self.toast = None;
        self.shake = None;
    }

    /// Advance timers and execute any reveal steps that have come due
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.toast
            && now >= toast.deadline
        {
            self.toast = None;
        }
        if let Some((_, deadline)) = self.shake
            && now >= deadline
        {
            self.shake = None;
        }

        let Some(reveal) = &mut self.reveal else { return };
        let elapsed = now.saturating_duration_since(reveal.started);
        let due = reveal.schedule.drain_due(elapsed);
        let finished = reveal.schedule.is_empty();

        for step in due {
            match step {
                RevealStep::FlipStart(col) => self.flipping = Some(col),
                RevealStep::Score(col) => self.session.reveal_cell(col),
                RevealStep::FlipEnd(col) => {
                    if self.flipping == Some(col) {
                        self.flipping = None;
                    }
                }
                RevealStep::Finish => {
                    let answer = self.session.round().answer().text().to_uppercase();
                    match self.session.finish_reveal() {
                        Some(end) if end.won => self.show_toast("Nice! You got it.", now),
                        Some(_) => self.show_toast(&format!("Answer: {answer}"), now),
                        None => {}
                    }
                }
            }
        }

        if finished {
            self.reveal = None;
            self.flipping = None;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (avoids double input on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::reveal_duration;
    use crate::stats::{MemoryStore, StatsTracker};
    use crate::wordlists::WordPool;

    fn app() -> App {
        let pool = WordPool::from_words(
            vec![Word::new("slate").unwrap()],
            vec![Word::new("crane").unwrap()],
        );
        let tracker = StatsTracker::new(Box::new(MemoryStore::default()));
        App::new(Session::new(pool, tracker))
    }

    fn press(app: &mut App, ch: char, now: Instant) {
        app.handle_key(KeyCode::Char(ch), KeyModifiers::NONE, now);
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for ch in word.chars() {
            press(app, ch, now);
        }
    }

    #[test]
    fn short_guess_toasts_without_state_change() {
        let mut app = app();
        let now = Instant::now();

        type_word(&mut app, "cra", now);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE, now);

        assert_eq!(app.toast(), Some("Not enough letters"));
        assert_eq!(app.session.round().cursor(), (0, 3));
        assert_eq!(app.session.round().phase(), Phase::Typing);
    }

    #[test]
    fn unknown_word_toasts_and_shakes() {
        let mut app = app();
        let now = Instant::now();

        type_word(&mut app, "zzzzz", now);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE, now);

        assert_eq!(app.toast(), Some("Not in word list"));
        assert_eq!(app.shaking_row(), Some(0));

        // Both notices expire on their own
        app.tick(now + Duration::from_secs(2));
        assert_eq!(app.toast(), None);
        assert_eq!(app.shaking_row(), None);
    }

    #[test]
    fn new_toast_supersedes_old_timer() {
        let mut app = app();
        let start = Instant::now();

        type_word(&mut app, "cra", start);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE, start);

        // A second toast 1s later pushes the deadline out
        let later = start + Duration::from_secs(1);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE, later);

        app.tick(start + TOAST_DURATION);
        assert_eq!(app.toast(), Some("Not enough letters"));

        app.tick(later + TOAST_DURATION);
        assert_eq!(app.toast(), None);
    }

    #[test]
    fn reveal_plays_out_over_ticks_and_wins() {
        let mut app = app();
        let start = Instant::now();

        type_word(&mut app, "slate", start);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE, start);
        assert_eq!(app.session.round().phase(), Phase::Revealing);

        // Typing mid-reveal goes nowhere
        press(&mut app, 'x', start);
        assert_eq!(app.session.round().cells()[1][0].letter, None);

        // Halfway: some tiles revealed, outcome not yet applied
        app.tick(start + Duration::from_millis(700));
        assert!(app.session.round().cells()[0][0].revealed);
        assert!(!app.session.round().cells()[0][4].revealed);
        assert_eq!(app.session.round().phase(), Phase::Revealing);

        // Past the end: locked, recorded, toasted
        app.tick(start + reveal_duration() + Duration::from_secs(1));
        assert_eq!(app.session.round().phase(), Phase::Locked);
        assert_eq!(app.toast(), Some("Nice! You got it."));
        assert_eq!(app.session.stats().wins, 1);
        assert_eq!(app.flipping_col(), None);
    }

    #[test]
    fn loss_reveals_answer_in_toast() {
        let mut app = app();
        let mut now = Instant::now();

        for _ in 0..6 {
            type_word(&mut app, "crane", now);
            app.handle_key(KeyCode::Enter, KeyModifiers::NONE, now);
            now += reveal_duration() + Duration::from_secs(1);
            app.tick(now);
        }

        assert_eq!(app.session.round().phase(), Phase::Locked);
        assert_eq!(app.toast(), Some("Answer: SLATE"));
        assert_eq!(app.session.stats().played, 1);
        assert_eq!(app.session.stats().wins, 0);
    }

    #[test]
    fn enter_when_locked_starts_fresh_round() {
        let mut app = app();
        let start = Instant::now();

        type_word(&mut app, "slate", start);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE, start);
        app.tick(start + reveal_duration() + Duration::from_secs(1));
        assert_eq!(app.session.round().phase(), Phase::Locked);

        let later = start + Duration::from_secs(10);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE, later);
        assert_eq!(app.session.round().phase(), Phase::Typing);
        assert_eq!(app.session.round().cursor(), (0, 0));
        assert_eq!(app.toast(), None);
    }

    #[test]
    fn ctrl_n_restarts_any_time() {
        let mut app = app();
        let now = Instant::now();

        type_word(&mut app, "cra", now);
        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL, now);
        assert_eq!(app.session.round().cursor(), (0, 0));
    }

    #[test]
    fn plain_n_is_just_a_letter() {
        let mut app = app();
        let now = Instant::now();

        press(&mut app, 'n', now);
        assert_eq!(app.session.round().cells()[0][0].letter, Some(b'n'));
    }

    #[test]
    fn fallback_pool_surfaces_notice() {
        let tracker = StatsTracker::new(Box::new(MemoryStore::default()));
        let app = App::new(Session::new(WordPool::fallback(), tracker));
        assert_eq!(
            app.toast(),
            Some("Word lists not found; using fallback words.")
        );
    }
}
