//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! Analysis results cross into the UI only as return values of
//! `SentimentAnalyzer::analyze`; components never call the analyzer.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, InputComponent, QuitDialog, QuoteComponent, ResultPanel,
    SplashComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::sentiment::{LexiconScorer, LexiconSource, SentimentAnalyzer};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    analyzer: SentimentAnalyzer<LexiconScorer>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub input: InputComponent,
    pub result: ResultPanel,
    pub quote: QuoteComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance from the loaded configuration
    pub fn new(config: &Config) -> App {
        let source = LexiconSource::from_config(config.lexicon_path.as_deref());
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        App {
            mode,
            modals: ModalStack::new(),
            should_quit: false,
            analyzer: SentimentAnalyzer::new(LexiconScorer::new(source)),
            splash: SplashComponent::new(config.fade_step()),
            input: InputComponent::new(),
            result: ResultPanel::new(config.fade_step()),
            quote: QuoteComponent::new(config.quote_interval()),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog,
        }
    }

    /// Analyze the entry and hand the outcome to the result panel.
    ///
    /// The entry is cleared only when the analysis succeeds, so a failed
    /// attempt can be retried without retyping.
    fn analyze_entry(&mut self) {
        let now = Instant::now();
        match self.analyzer.analyze(self.input.value()) {
            Ok(result) => {
                self.result.show_result(result, now);
                self.input.clear();
            }
            Err(err) => {
                self.result.show_error(err.to_string(), now);
            }
        }
    }

    fn reset(&mut self) {
        debug!("reset entry and result");
        self.input.clear();
        self.result.clear();
    }

    /// Keys handled before the entry sees them
    fn handle_global_key(&self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => Some(Action::Reset),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::F(1) => Some(Action::OpenHelp),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        if self.mode == AppMode::Splash {
            self.splash.init()?;
        }
        self.quote.init()?;

        // Load the lexicon up front so a missing file shows before the first analysis
        match self.analyzer.scorer().warm_up() {
            Ok(lexicon) => info!(
                source = ?self.analyzer.scorer().source(),
                entries = lexicon.len(),
                "scorer ready"
            ),
            Err(err) => self.result.show_error(err.to_string(), Instant::now()),
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => match self.modals.top() {
                Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
                Some(Modal::Help) => self.help_dialog.handle_key_event(key),
                None => match self.handle_global_key(key) {
                    Some(action) => Ok(Some(action)),
                    None => self.input.handle_key_event(key),
                },
            },
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                self.result.tick(Instant::now());
                self.quote.update(Action::Tick)?;
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Text Entry (delegate to InputComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::InputChar(_)
            | Action::InputBackspace
            | Action::InputDelete
            | Action::CursorLeft
            | Action::CursorRight
            | Action::CursorHome
            | Action::CursorEnd => {
                self.input.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Analysis
            // ─────────────────────────────────────────────────────────────────
            Action::Analyze => self.analyze_entry(),
            Action::Reset => self.reset(),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to ResultPanel)
            // ─────────────────────────────────────────────────────────────────
            Action::PageUp | Action::PageDown => {
                self.result.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                if self.modals.top() != Some(&Modal::Help) {
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    self.should_quit = true;
                }
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                draw_home_screen(frame, area, &mut self.input, &mut self.result, &mut self.quote)?;

                for modal in self.modals.iter() {
                    match modal {
                        Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                        Modal::Help => self.help_dialog.draw(frame, area)?,
                    }
                }
            }
        }
        Ok(())
    }
}
