use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::api::HttpApi;
use crate::app::view::Modal;
use crate::app::Controller;

mod chart;
mod views;

/// What a frame asked for. Dispatched after the state lock is released.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenModal(Modal),
    CloseModals,
    SubmitLogin,
    SubmitRegister,
    Logout,
    VoteNow,
    ShowHomepage,
    ShowAdminPanel,
    RequestVote(u32),
    ConfirmVote,
    CancelVote,
    DismissAlert,
}

pub struct VotingApp {
    controller: Controller<HttpApi>,
    // keeps request tasks alive for the lifetime of the window
    _runtime: Runtime,
}

impl VotingApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        controller: Controller<HttpApi>,
        runtime: Runtime,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let startup = controller.clone();
        controller.spawn(async move { startup.start().await });

        Self {
            controller,
            _runtime: runtime,
        }
    }

    fn dispatch(&self, action: Action) {
        let controller = self.controller.clone();
        match action {
            Action::OpenModal(modal) => controller.open_modal(modal),
            Action::CloseModals => controller.close_modals(),
            Action::SubmitLogin => {
                let (email, password) = {
                    let state = controller.state();
                    (state.login_form.email.clone(), state.login_form.password.clone())
                };
                self.controller
                    .spawn(async move { controller.login(&email, &password).await });
            }
            Action::SubmitRegister => {
                let (name, email, password, confirm) = {
                    let state = controller.state();
                    let form = &state.register_form;
                    (
                        form.name.clone(),
                        form.email.clone(),
                        form.password.clone(),
                        form.confirm_password.clone(),
                    )
                };
                self.controller.spawn(async move {
                    controller
                        .register(&name, &email, &password, &confirm)
                        .await
                });
            }
            Action::Logout => self.controller.spawn(async move { controller.logout().await }),
            Action::VoteNow => self.controller.spawn(async move { controller.vote_now().await }),
            Action::ShowHomepage => controller.show_homepage(),
            Action::ShowAdminPanel => {
                self.controller
                    .spawn(async move { controller.show_admin_panel().await })
            }
            Action::RequestVote(candidate_id) => controller.request_vote(candidate_id),
            Action::ConfirmVote => {
                self.controller
                    .spawn(async move { controller.confirm_vote().await })
            }
            Action::CancelVote => controller.cancel_vote(),
            Action::DismissAlert => controller.dismiss_alert(),
        }
    }
}

impl eframe::App for VotingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.prune_alerts(now);

        let actions = {
            let mut state = self.controller.state();
            views::render(ctx, &mut state, now)
        };
        for action in actions {
            log::debug!("Dispatching {:?}", action);
            self.dispatch(action);
        }

        // request tasks mutate state off the UI thread
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
