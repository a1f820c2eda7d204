//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Player;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameOutcome, GameState};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.state = GameState::new(GameMode::PvE {
                            human_color: Player::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.state = GameState::new(GameMode::PvE {
                            human_color: Player::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state = GameState::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!(
                            "PvE - You: {}",
                            if human_color == Player::Black {
                                "Black"
                            } else {
                                "White"
                            }
                        ),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Player::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(color_name)
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.outcome.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Engine to move", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if self.state.is_ai_thinking() {
                if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                    let secs = elapsed.as_secs_f32();
                    let budget = self.state.engine_config.time_limit().as_secs_f32();
                    let color = if secs < budget * 0.5 {
                        TIMER_NORMAL
                    } else if secs < budget {
                        TIMER_WARNING
                    } else {
                        TIMER_CRITICAL
                    };

                    ui.label(
                        RichText::new(format!("{secs:.2}s"))
                            .size(28.0)
                            .strong()
                            .color(color),
                    );
                }
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(
                                RichText::new("Undo").size(12.0).color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                if self.state.mode == GameMode::PvP {
                    btn_frame.show(ui, |ui| {
                        if ui
                            .add(
                                egui::Label::new(
                                    RichText::new("Hint").size(12.0).color(TEXT_PRIMARY),
                                )
                                .sense(egui::Sense::click()),
                            )
                            .clicked()
                        {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.stone_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render engine statistics card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let config = self.state.engine_config;
                ui.label(
                    RichText::new(format!(
                        "depth <= {}, budget {}ms",
                        config.max_depth, config.time_limit_ms
                    ))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
                );
                ui.add_space(4.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("depth {}", result.depth))
                                    .size(11.0)
                                    .strong()
                                    .color(TIMER_NORMAL),
                            );
                            ui.label(
                                RichText::new(format!("Score: {}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });

                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("-> ({}, {})", pos.row, pos.col))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(
                        RichText::new("No search yet")
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    match outcome {
                        GameOutcome::Win { winner, line } => {
                            let (name, symbol, accent) = if *winner == Player::Black {
                                ("BLACK", "●", egui::Color32::from_rgb(70, 70, 75))
                            } else {
                                ("WHITE", "○", egui::Color32::from_rgb(220, 220, 225))
                            };

                            ui.horizontal(|ui| {
                                ui.add_space(ui.available_width() / 2.0 - 60.0);
                                ui.label(RichText::new(symbol).size(32.0).color(accent));
                                ui.add_space(8.0);
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(name)
                                            .size(18.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    );
                                    ui.label(
                                        RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT),
                                    );
                                });
                            });

                            ui.add_space(4.0);
                            ui.label(
                                RichText::new(format!("{} in a row", line.len()))
                                    .size(11.0)
                                    .color(TEXT_SECONDARY),
                            );
                        }
                        GameOutcome::Draw => {
                            ui.label(
                                RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY),
                            );
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new("board is full")
                                    .size(11.0)
                                    .color(TEXT_SECONDARY),
                            );
                        }
                    }

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Game")
                                            .size(14.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let winning_line = match &self.state.outcome {
                Some(GameOutcome::Win { line, .. }) => Some(line.clone()),
                _ => None,
            };

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.suggested_move,
                winning_line.as_deref(),
                self.state.outcome.is_some(),
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.outcome.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep repainting while the worker thread runs
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
