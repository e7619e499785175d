use std::time::Instant;

use egui::{Align2, Color32, Key, RichText, Vec2};

use crate::app::alert::Severity;
use crate::app::charts::ChartName;
use crate::app::state::AppState;
use crate::app::view::{Modal, View};
use crate::models::user::Identity;

use super::{chart, Action};

const HOW_IT_WORKS: [&str; 4] = [
    "Register or log in with your email address.",
    "Open the voting dashboard and review the candidates.",
    "Pick one candidate and confirm your choice.",
    "Watch the live results once your vote is counted.",
];

pub fn render(ctx: &egui::Context, state: &mut AppState, now: Instant) -> Vec<Action> {
    let mut actions = Vec::new();

    header(ctx, state, &mut actions);
    footer(ctx, state);

    egui::CentralPanel::default().show(ctx, |ui| {
        alert_banner(ui, state, now, &mut actions);

        // an open dialog locks the page underneath
        let blocked = state.modal.is_some() || state.pending_vote.is_some();
        let view = state.view;
        ui.add_enabled_ui(!blocked, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match view {
                    View::Homepage => homepage(ui, state, &mut actions),
                    View::VotingDashboard => voting_dashboard(ui, state, &mut actions),
                    View::AdminPanel => admin_panel(ui, state),
                });
        });
    });

    modals(ctx, state, &mut actions);
    confirmation(ctx, state, &mut actions);

    actions
}

fn header(ctx: &egui::Context, state: &AppState, actions: &mut Vec<Action>) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Smart Voting System").heading())
                            .clicked()
                        {
                            actions.push(Action::ShowHomepage);
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match state.session.user.as_ref() {
                            Some(user) => {
                                if ui.button("Logout").clicked() {
                                    actions.push(Action::Logout);
                                }
                                if user.is_admin && ui.button("Admin Panel").clicked() {
                                    actions.push(Action::ShowAdminPanel);
                                }
                                ui.label(format!("Welcome, {}", user.name));
                            }
                            None => {
                                if ui.button("Register").clicked() {
                                    actions.push(Action::OpenModal(Modal::Register));
                                }
                                if ui.button("Login").clicked() {
                                    actions.push(Action::OpenModal(Modal::Login));
                                }
                            }
                        }
                    });
                });
            });
    });
}

fn footer(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(status_line(state.session.user.as_ref()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(match state.view {
                    View::Homepage => "Home",
                    View::VotingDashboard => "Voting Dashboard",
                    View::AdminPanel => "Admin Panel",
                });
            });
        });
    });
}

fn status_line(user: Option<&Identity>) -> String {
    match user {
        Some(Identity { id: Some(id), email, .. }) => {
            format!("Status: Signed in as {email} (#{id})")
        }
        Some(user) => format!("Status: Signed in as {}", user.email),
        None => "Status: Not signed in".to_owned(),
    }
}

fn severity_colors(severity: Severity) -> (Color32, Color32) {
    match severity {
        Severity::Success => (
            Color32::from_rgb(212, 237, 218),
            Color32::from_rgb(21, 87, 36),
        ),
        Severity::Danger => (
            Color32::from_rgb(248, 215, 218),
            Color32::from_rgb(114, 28, 36),
        ),
        Severity::Warning => (
            Color32::from_rgb(255, 243, 205),
            Color32::from_rgb(133, 100, 4),
        ),
        Severity::Info => (
            Color32::from_rgb(209, 236, 241),
            Color32::from_rgb(12, 84, 96),
        ),
    }
}

fn alert_banner(ui: &mut egui::Ui, state: &AppState, now: Instant, actions: &mut Vec<Action>) {
    let Some(alert) = state.alerts.visible(now) else {
        return;
    };
    let (fill, text) = severity_colors(alert.severity);
    egui::Frame::none()
        .fill(fill)
        .rounding(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(alert.message.as_str()).color(text).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        actions.push(Action::DismissAlert);
                    }
                });
            });
        });
    ui.add_space(8.0);
}

fn homepage(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<Action>) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Secure, Transparent Online Voting");
        ui.add_space(8.0);
        ui.label(
            "Cast your vote from anywhere. Every ballot is screened for suspicious \
             activity before it is counted.",
        );
        ui.add_space(16.0);
        if ui
            .button(RichText::new(state.entry_button_label()).size(18.0))
            .clicked()
        {
            actions.push(Action::VoteNow);
        }
    });

    ui.add_space(24.0);
    ui.separator();
    ui.heading("How it works");
    for (i, step) in HOW_IT_WORKS.iter().enumerate() {
        ui.label(format!("{}. {}", i + 1, step));
    }
}

fn voting_dashboard(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<Action>) {
    ui.heading("Cast Your Vote");
    ui.label("Choose one candidate. A cast vote cannot be changed.");
    ui.add_space(12.0);

    if state.candidates.is_empty() {
        ui.label("Loading candidates...");
        return;
    }

    let enabled = state.vote_controls_enabled && !state.vote_in_flight;
    for card in state.candidates.values() {
        egui::Frame::group(ui.style())
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(card.display_name()).heading());
                if let Some(party) = &card.party {
                    ui.label(party.as_str());
                }
                if let Some(votes) = card.vote_label() {
                    ui.label(RichText::new(votes).strong());
                }
                ui.add_space(6.0);
                let button = egui::Button::new(state.vote_button_label());
                if ui.add_enabled(enabled, button).clicked() {
                    actions.push(Action::RequestVote(card.id));
                }
            });
        ui.add_space(8.0);
    }
}

fn admin_panel(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Admin Dashboard");
    ui.add_space(8.0);

    let slots = [
        ("Total Votes", &state.stats.total_votes),
        ("Fraud Alerts", &state.stats.fraud_alerts),
        ("Voter Turnout", &state.stats.voter_turnout),
        ("Avg. Voting Time", &state.stats.avg_voting_time),
    ];
    ui.columns(slots.len(), |columns| {
        for (column, (title, value)) in columns.iter_mut().zip(slots) {
            egui::Frame::group(column.style()).show(column, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(title);
                    ui.label(RichText::new(value.as_str()).size(24.0).strong());
                });
            });
        }
    });

    ui.add_space(16.0);
    match &state.charts {
        Some(charts) => {
            ui.columns(2, |columns| {
                chart::bar_chart(
                    &mut columns[0],
                    ChartName::VoteDistribution,
                    charts.series(ChartName::VoteDistribution),
                );
                chart::split_chart(
                    &mut columns[1],
                    ChartName::FraudSplit,
                    charts.series(ChartName::FraudSplit),
                );
            });
        }
        None => {
            ui.label("Loading charts...");
        }
    }
}

fn modals(ctx: &egui::Context, state: &mut AppState, actions: &mut Vec<Action>) {
    let Some(modal) = state.modal else {
        return;
    };
    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        actions.push(Action::CloseModals);
        return;
    }

    let title = match modal {
        Modal::Login => "Login",
        Modal::Register => "Register",
    };
    let busy = state.auth_in_flight;
    let shown = egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| match modal {
            Modal::Login => login_form(ui, state, busy, actions),
            Modal::Register => register_form(ui, state, busy, actions),
        });

    let clicked_outside = shown.is_some_and(|inner| {
        ctx.input(|i| {
            i.pointer.any_click()
                && i
                    .pointer
                    .interact_pos()
                    .is_some_and(|pos| !inner.response.rect.contains(pos))
        })
    });
    if clicked_outside {
        actions.push(Action::CloseModals);
    }
}

fn login_form(ui: &mut egui::Ui, state: &mut AppState, busy: bool, actions: &mut Vec<Action>) {
    let mut submitted = false;
    egui::Grid::new("login_grid").num_columns(2).show(ui, |ui| {
        ui.label("Email:");
        ui.text_edit_singleline(&mut state.login_form.email);
        ui.end_row();

        ui.label("Password:");
        let password =
            ui.add(egui::TextEdit::singleline(&mut state.login_form.password).password(true));
        submitted = password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("Login")).clicked() {
            submitted = true;
        }
        if ui.link("Need an account? Register").clicked() {
            actions.push(Action::OpenModal(Modal::Register));
        }
    });

    if submitted && !busy {
        actions.push(Action::SubmitLogin);
    }
}

fn register_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    busy: bool,
    actions: &mut Vec<Action>,
) {
    let mut submitted = false;
    let form = &mut state.register_form;
    egui::Grid::new("register_grid").num_columns(2).show(ui, |ui| {
        ui.label("Name:");
        ui.text_edit_singleline(&mut form.name);
        ui.end_row();

        ui.label("Email:");
        ui.text_edit_singleline(&mut form.email);
        ui.end_row();

        ui.label("Password:");
        ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
        ui.end_row();

        ui.label("Confirm Password:");
        let confirm = ui.add(egui::TextEdit::singleline(&mut form.confirm_password).password(true));
        submitted = confirm.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("Register")).clicked() {
            submitted = true;
        }
        if ui.link("Already registered? Login").clicked() {
            actions.push(Action::OpenModal(Modal::Login));
        }
    });

    if submitted && !busy {
        actions.push(Action::SubmitRegister);
    }
}

fn confirmation(ctx: &egui::Context, state: &AppState, actions: &mut Vec<Action>) {
    let Some(pending) = &state.pending_vote else {
        return;
    };
    egui::Window::new("Confirm Vote")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(pending.prompt());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    actions.push(Action::ConfirmVote);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(Action::CancelVote);
                }
            });
        });
}
