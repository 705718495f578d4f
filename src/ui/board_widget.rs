use crate::game::{Cell, Coordinate, Grid, Player};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Colour used for a player's discs and banner.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Build the framed board, top row first.
///
/// `selected_column` draws the column header and the ▲ marker; cells in
/// `highlight` are drawn as the connected winning run.
pub fn board_lines(
    grid: &Grid,
    selected_column: Option<usize>,
    highlight: &[Coordinate],
    show_column_numbers: bool,
) -> Vec<Line<'static>> {
    let columns = grid.columns();
    let inner_width = columns * 3 + 1;
    let mut lines = Vec::with_capacity(grid.rows() + 4);

    if show_column_numbers {
        // Padding (3 chars to match "  ║")
        let mut col_line = vec![Span::raw("   ")];
        for col in 0..columns {
            let label = format!("{:^3}", col + 1);
            if Some(col) == selected_column {
                col_line.push(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
            } else {
                col_line.push(Span::raw(label));
            }
        }
        col_line.push(Span::raw("  "));
        lines.push(Line::from(col_line));
    }

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(inner_width))));

    for row in (0..grid.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..columns {
            let coord = Coordinate::new(col, row);
            let cell = grid.get(coord).unwrap_or(Cell::Empty);
            row_spans.push(cell_span(cell, highlight.contains(&coord)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(inner_width))));

    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..columns {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

fn cell_span(cell: Cell, connected: bool) -> Span<'static> {
    match cell.player() {
        None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Some(player) if connected => Span::styled(
            " ◉ ",
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Some(player) => Span::styled(" ● ", Style::default().fg(player_color(player))),
    }
}

/// Render the board into `area`, centred.
pub fn render_board(
    frame: &mut Frame,
    grid: &Grid,
    selected_column: Option<usize>,
    highlight: &[Coordinate],
    show_column_numbers: bool,
    area: Rect,
) {
    let lines = board_lines(grid, selected_column, highlight, show_column_numbers);
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::GameController;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_board_layout() {
        let grid = Grid::empty(&GameConfig::default());
        let lines = board_lines(&grid, Some(3), &[], true);

        // numbers, top border, 6 rows, bottom border, indicator
        assert_eq!(lines.len(), 10);
        assert_eq!(text(&lines[0]), "    1  2  3  4  5  6  7   ");
        assert_eq!(text(&lines[1]), "  ╔══════════════════════╗");
        assert_eq!(text(&lines[2]), "  ║ .  .  .  .  .  .  .  ║");
        assert_eq!(text(&lines[8]), "  ╚══════════════════════╝");
        assert_eq!(text(&lines[9]), "             ▲            ");
    }

    #[test]
    fn test_bottom_row_drawn_last() {
        let mut controller = GameController::default();
        controller.drop_disc(0).unwrap();
        controller.drop_disc(0).unwrap();
        let lines = board_lines(controller.state().grid(), None, &[], false);

        // top border, 6 rows, bottom border
        assert_eq!(lines.len(), 8);
        assert_eq!(text(&lines[6]), "  ║ ●  .  .  .  .  .  .  ║");
        assert_eq!(text(&lines[5]), "  ║ ●  .  .  .  .  .  .  ║");
        assert_eq!(lines[6].spans[1].style.fg, Some(Color::Red));
        assert_eq!(lines[5].spans[1].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_highlighted_cells_use_connected_symbol() {
        let mut controller = GameController::new(GameConfig::new(3, 3, 3));
        for column in [0, 0, 1, 1, 2] {
            controller.drop_disc(column).unwrap();
        }
        let line = controller.state().winning_line(3).unwrap();
        let lines = board_lines(controller.state().grid(), None, &line, false);
        assert_eq!(text(&lines[3]), "  ║ ◉  ◉  ◉  ║");
        assert_eq!(text(&lines[2]), "  ║ ●  ●  .  ║");
    }

    #[test]
    fn test_player_colors() {
        assert_eq!(player_color(Player::One), Color::Red);
        assert_eq!(player_color(Player::Two), Color::Yellow);
    }
}
