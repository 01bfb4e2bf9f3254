//! Main application for the desktop interface

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameSession, Outcome};
use super::theme::*;
use crate::board::Stone;

/// Main application: a menu screen until a mode is picked, then the
/// board plus an info panel
pub struct GobangApp {
    session: Option<GameSession>,
    board_view: BoardView,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self {
            session: None,
            board_view: BoardView::default(),
        }
    }
}

impl GobangApp {
    /// Create the app on the menu screen
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (You: Black)").clicked() {
                        self.session = Some(GameSession::new(GameMode::PvE {
                            human: Stone::Black,
                        }));
                        ui.close_menu();
                    }
                    if ui.button("New Game (You: White)").clicked() {
                        self.session = Some(GameSession::new(GameMode::PvE {
                            human: Stone::White,
                        }));
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two Players)").clicked() {
                        self.session = Some(GameSession::new(GameMode::PvP));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Back to Menu").clicked() {
                        self.session = None;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.as_ref().map(|s| s.mode) {
                        Some(GameMode::PvE { human }) => format!(
                            "You: {}",
                            if human == Stone::Black { "Black" } else { "White" }
                        ),
                        Some(GameMode::PvP) => "Two players".to_string(),
                        None => "Pick a mode".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_title_card(ui);
                ui.add_space(12.0);
                Self::render_turn_card(ui, session);
                ui.add_space(10.0);
                Self::render_actions_card(ui, session);

                if let Some(outcome) = session.outcome {
                    ui.add_space(10.0);
                    Self::render_outcome_card(ui, session, outcome);
                }

                if let Some(msg) = &session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("● ○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("GOBANG")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, session: &GameSession) {
        Self::card_frame().show(ui, |ui| {
            let is_black = session.current_turn() == Stone::Black;
            let (color_name, accent) = if is_black {
                ("BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(color_name)
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if session.outcome.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if session.is_human_turn() {
                        ("Your move", STATUS_ACTIVE)
                    } else {
                        ("Computer to move", STATUS_WAITING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(ui: &mut egui::Ui, session: &mut GameSession) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("New game (N)").clicked() {
                session.reset();
            }

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Stones on board: {}", session.board().stone_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_outcome_card(ui: &mut egui::Ui, session: &mut GameSession, outcome: Outcome) {
        Frame::new()
            .fill(OUTCOME_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(OUTCOME_ACCENT));
                    ui.add_space(8.0);

                    match outcome {
                        Outcome::Win(stone) => {
                            let name = if stone == Stone::Black { "BLACK" } else { "WHITE" };
                            ui.label(
                                RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY),
                            );
                            ui.label(
                                RichText::new("wins with five in a row")
                                    .size(12.0)
                                    .color(WIN_HIGHLIGHT),
                            );
                        }
                        Outcome::Draw => {
                            ui.label(
                                RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY),
                            );
                            ui.label(
                                RichText::new("no empty cells left")
                                    .size(12.0)
                                    .color(TEXT_SECONDARY),
                            );
                        }
                    }

                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        session.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the central panel: the mode menu, or the board once a
    /// session runs
    fn render_central(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_AREA_BG;

            if let Some(session) = self.session.as_mut() {
                let accept_input = session.outcome.is_none() && session.is_human_turn();
                let clicked = self.board_view.show(
                    ui,
                    session.board(),
                    session.current_turn(),
                    session.last_move.map(|m| m.pos),
                    accept_input,
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = session.try_place(pos) {
                        session.message = Some(msg);
                    }
                }
            } else if let Some(mode) = Self::render_menu_screen(ui) {
                self.session = Some(GameSession::new(mode));
            }
        });
    }

    /// Render the mode selection screen, returning the picked mode
    fn render_menu_screen(ui: &mut egui::Ui) -> Option<GameMode> {
        let mut picked = None;

        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.label(
                RichText::new("GOBANG")
                    .size(42.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            ui.label(
                RichText::new("five stones in a row wins")
                    .size(14.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(40.0);

            let size = Vec2::new(220.0, 36.0);
            if ui
                .add_sized(size, egui::Button::new("Play as Black"))
                .clicked()
            {
                picked = Some(GameMode::PvE {
                    human: Stone::Black,
                });
            }
            ui.add_space(8.0);
            if ui
                .add_sized(size, egui::Button::new("Play as White"))
                .clicked()
            {
                picked = Some(GameMode::PvE {
                    human: Stone::White,
                });
            }
            ui.add_space(8.0);
            if ui
                .add_sized(size, egui::Button::new("Two Players"))
                .clicked()
            {
                picked = Some(GameMode::PvP);
            }
        });

        picked
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game in the current mode
            if i.key_pressed(egui::Key::N) {
                if let Some(session) = self.session.as_mut() {
                    session.reset();
                }
            }
        });
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_central(ctx);
    }
}
