use super::board_widget::{player_color, render_board};
use crate::config::{GameConfig, UiConfig};
use crate::game::{Coordinate, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    game_config: &GameConfig,
    ui_config: &UiConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(game_config.rows as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let highlight: Vec<Coordinate> = if ui_config.highlight_winning_line {
        game_state
            .winning_line(game_config.win_length)
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let selected = (!game_state.is_game_over()).then_some(selected_column);

    render_header(frame, game_state, chunks[0]);
    render_board(
        frame,
        game_state.grid(),
        selected,
        &highlight,
        ui_config.show_column_numbers,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Banner text: whose turn it is, or who won.
pub fn status_text(game_state: &GameState) -> String {
    let player = game_state.current_player();
    if game_state.is_game_over() {
        format!("Player {} has won!", player.number())
    } else {
        format!("Player {}'s Turn", player.number())
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let color = player_color(game_state.current_player());

    let header = Paragraph::new(status_text(game_state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  1-9: Drop in column  |  Enter: Drop  |  R: Reset  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
