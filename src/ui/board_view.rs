//! Board rendering for the desktop interface

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Pos, Stone};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Lines per side of the grid being drawn
    grid_len: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            grid_len: Board::DEFAULT_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked position if any.
    ///
    /// `accept_input` turns the hover preview and clicks off, e.g.
    /// once the game is over.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Stone,
        last_move: Option<Pos>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        self.grid_len = board.size();

        // Fit a square board into the available space
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / (self.grid_len as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
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
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (self.grid_len as f32 - 1.0) * self.cell_size;

        for i in 0..self.grid_len {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi) on the classic board
    fn draw_star_points(&self, painter: &Painter) {
        if self.grid_len != 15 {
            return;
        }
        for (row, col) in STAR_POINTS_15 {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels around the grid
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        // Column letters fit up to a 26-line board
        if self.grid_len <= 26 {
            for col in 0..self.grid_len {
                let letter = (b'A' + col as u8) as char;
                let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

                let pos = Pos2::new(x, self.board_rect.min.y + 14.0);
                painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

                let pos = Pos2::new(x, self.board_rect.max.y - 14.0);
                painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            }
        }

        // Row numbers count down so the bottom row reads 1
        for row in 0..self.grid_len {
            let num = self.grid_len - row;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + 14.0, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", num),
                font.clone(),
                GRID_LINE,
            );

            let pos = Pos2::new(self.board_rect.max.x - 14.0, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", num),
                font.clone(),
                GRID_LINE,
            );
        }
    }

    /// Draw all placed stones from the row-major snapshot
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (idx, &stone) in board.cells().iter().enumerate() {
            let pos = Pos::from_index(self.grid_len, idx);
            match stone {
                Stone::Black => self.draw_stone(painter, pos, true),
                Stone::White => self.draw_stone(painter, pos, false),
                Stone::Empty => {}
            }
        }
    }

    /// Draw a single stone with a drop shadow
    fn draw_stone(&self, painter: &Painter, pos: Pos, is_black: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let shadow_alpha = if is_black { 60 } else { 40 };
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, shadow_alpha),
        );

        if is_black {
            painter.circle_filled(center, radius, BLACK_STONE);
            // Specular dot toward the upper left
            painter.circle_filled(
                center - Vec2::new(radius, radius) * 0.3,
                radius * 0.2,
                BLACK_STONE_HIGHLIGHT,
            );
        } else {
            painter.circle_filled(center, radius, WHITE_STONE);
            // Rim shading keeps the white stone visible on light wood
            painter.circle_stroke(
                center,
                radius * 0.85,
                Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
            );
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a ghost stone under the pointer
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            (true, Stone::Empty) => return,
        };

        painter.circle_filled(center, radius, color);
    }

    /// Map a pixel to the nearest intersection, `None` off the grid
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let rel = (screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN)) / self.cell_size;
        let col = (rel.x + 0.5).floor() as i32;
        let row = (rel.y + 0.5).floor() as i32;

        if row >= 0 && col >= 0 && row < self.grid_len as i32 && col < self.grid_len as i32 {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Pixel center of an intersection
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        origin + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size
    }
}
