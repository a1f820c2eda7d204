//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Player, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        suggested_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        game_over: bool,
    ) -> Option<Pos> {
        let size = board.size();
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / (size as f32 - 1.0).max(1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter, size);
        self.draw_star_points(&painter, size);
        self.draw_coordinates(&painter, size);
        self.draw_stones(&painter, board);

        if let Some(pos) = board.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos, current_turn);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos, size) {
                    let is_valid = board.is_empty(board_pos);

                    self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter, size: usize) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = (size as f32 - 1.0) * self.cell_size;

        for i in 0..size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter, size: usize) {
        for pos in star_points(size) {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw numeric coordinate labels matching the row/col convention
    fn draw_coordinates(&self, painter: &Painter, size: usize) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..size {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let pos = Pos2::new(x, self.board_rect.min.y + 10.0);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{col}"),
                font.clone(),
                GRID_LINE,
            );
        }

        for row in 0..size {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{row}"),
                font.clone(),
                GRID_LINE,
            );
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for row in 0..board.size() {
            for col in 0..board.size() {
                let pos = Pos::new(row as u8, col as u8);
                if let Some(player) = board.get(pos) {
                    self.draw_stone(painter, pos, player);
                }
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        match player {
            Player::Black => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Player::White => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );

                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for &pos in line {
            let center = self.board_to_screen(pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match turn {
            Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 100),
            Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 100),
        };

        painter.circle_filled(center, radius, color);

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            if turn == Player::Black {
                WHITE_STONE
            } else {
                BLACK_STONE
            },
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    fn screen_to_board(&self, screen_pos: Pos2, size: usize) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if col >= 0 && col < size as i32 && row >= 0 && row < size as i32 {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.col) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.row) * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Star point positions for the given board size
fn star_points(size: usize) -> Vec<Pos> {
    if size < 9 {
        return Vec::new();
    }
    let edge = if size >= 13 { 3 } else { 2 };
    let coords = [edge, size / 2, size - 1 - edge];

    let mut points = Vec::new();
    for &row in &coords {
        for &col in &coords {
            points.push(Pos::new(row as u8, col as u8));
        }
    }
    points.sort();
    points.dedup();
    points
}
