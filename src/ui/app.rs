use crate::config::{AppConfig, UiConfig};
use crate::game::GameController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    controller: GameController,
    ui_config: UiConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let controller = GameController::new(config.game);
        App {
            selected_column: config.game.columns / 2, // Start in middle
            controller,
            ui_config: config.ui,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.controller.config().columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.controller.config().columns {
                    self.selected_column = column;
                    self.drop_disc();
                }
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.selected_column = self.controller.config().columns / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop disc in selected column
    fn drop_disc(&mut self) {
        if self.controller.state().is_game_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let before = self.controller.snapshot();
        match self.controller.drop_disc(self.selected_column as i64) {
            Ok(state) if *state == before => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(state) => {
                if let Some(winner) = state.winner() {
                    debug!(%winner, "announcing winner");
                    self.message = Some(format!("{winner} has won! Press 'r' to play again."));
                } else if state.grid().is_full() {
                    self.message = Some("The board is full. Press 'r' to restart.".to_string());
                }
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.controller.state(),
            self.selected_column,
            &self.message,
            self.controller.config(),
            &self.ui_config,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
