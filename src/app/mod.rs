//! The view controller: owns the application state and runs every user action
//! against the voting server.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::{debug, error, info, warn};
use tokio::runtime::Handle;

use crate::api::VotingApi;
use crate::config::Config;
use crate::error::{validate_login, validate_registration, ApiError, ValidationError};
use crate::models::auth::AuthResponse;
use crate::models::user::UserStatus;
use crate::models::vote::{VoteRequest, VoteResponse};

pub mod alert;
pub mod charts;
pub mod poller;
pub mod session;
pub mod state;
pub mod view;

use alert::Severity;
use charts::Charts;
use poller::spawn_poller;
use state::{AppState, CandidateCard, PendingVote, StatsDisplay};
use view::{Modal, View};

const NETWORK_ERROR: &str = "Network error. Please try again.";
const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
const REGISTRATION_FAILED: &str = "Registration failed";
const REGISTERED: &str = "Registration successful! You can now vote.";
const LOGGED_OUT: &str = "Logged out successfully";
const LOGOUT_FAILED: &str = "Error during logout";
const ALREADY_VOTED_THANKS: &str = "You have already voted! Thank you for participating.";
const PROCESSING_VOTE: &str = "Processing your vote...";
const VOTE_RECORDED: &str =
    "Your vote has been recorded successfully! Thank you for participating.";
const VOTE_FLAGGED: &str =
    "Suspicious voting activity detected. Your vote has been flagged for review.";
const VOTE_FAILED: &str = "Voting failed. Please try again.";
const VOTE_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
const RESULTS_SHOWN: &str = "Election results are displayed below. Thank you for voting!";

pub struct Controller<A> {
    api: Arc<A>,
    state: Arc<Mutex<AppState>>,
    config: Arc<Config>,
    runtime: Handle,
}

impl<A> Clone for Controller<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            config: self.config.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

impl<A: VotingApi> Controller<A> {
    pub fn new(api: A, config: Config, runtime: Handle) -> Self {
        let state = AppState::new(config.alert_ttl);
        Self {
            api: Arc::new(api),
            state: Arc::new(Mutex::new(state)),
            config: Arc::new(config),
            runtime,
        }
    }

    /// Never hold the guard across an `.await`.
    pub fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(task);
    }

    fn alert(&self, message: impl Into<String>, severity: Severity) {
        self.state().alerts.show(message, severity);
    }

    pub fn dismiss_alert(&self) {
        self.state().alerts.dismiss();
    }

    pub fn prune_alerts(&self, now: Instant) {
        self.state().alerts.prune(now);
    }

    /// Startup sequence: restore any server session, then prime the admin counters.
    pub async fn start(&self) {
        debug!("Restoring session and priming admin counters");
        self.check_status().await;
        self.refresh_admin_stats().await;
    }

    pub async fn check_status(&self) {
        match self.api.user_status().await {
            Ok(UserStatus { user: Some(user) }) => {
                let mut state = self.state();
                let welcome = format!("Welcome back, {}!", user.name);
                state.session.sign_in(user);
                state.alerts.show(welcome, Severity::Success);
            }
            Ok(_) => debug!("No active session"),
            Err(e) => error!("Error checking user status: {}", e),
        }
    }

    fn begin_auth(&self) -> bool {
        let mut state = self.state();
        if state.auth_in_flight {
            debug!("Auth request already in flight, ignoring");
            return false;
        }
        state.auth_in_flight = true;
        true
    }

    pub async fn login(&self, email: &str, password: &str) {
        if let Err(e) = validate_login(email, password) {
            self.alert(e.to_string(), Severity::Danger);
            return;
        }
        if !self.begin_auth() {
            return;
        }

        let result = self
            .api
            .login(email, password)
            .await
            .and_then(AuthResponse::into_identity);

        let mut state = self.state();
        state.auth_in_flight = false;
        match result {
            Ok(user) => {
                let welcome = format!("Welcome back, {}!", user.name);
                state.session.sign_in(user);
                state.modal = None;
                state.login_form.reset();
                state.alerts.show(welcome, Severity::Success);
            }
            Err(ApiError::Rejected { message }) => {
                let message = message.unwrap_or_else(|| LOGIN_FAILED.to_owned());
                state.alerts.show(message, Severity::Danger);
            }
            Err(e) => {
                error!("Login error: {}", e);
                state.alerts.show(NETWORK_ERROR, Severity::Danger);
            }
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str, confirm_password: &str) {
        if let Err(e) = validate_registration(
            name,
            email,
            password,
            confirm_password,
            self.config.min_password_len,
        ) {
            self.alert(e.to_string(), Severity::Danger);
            return;
        }
        if !self.begin_auth() {
            return;
        }

        let result = self
            .api
            .register(name, email, password)
            .await
            .and_then(AuthResponse::into_identity);

        let mut state = self.state();
        state.auth_in_flight = false;
        match result {
            Ok(user) => {
                state.session.sign_in(user);
                state.modal = None;
                state.register_form.reset();
                state.alerts.show(REGISTERED, Severity::Success);
            }
            Err(ApiError::Rejected { message }) => {
                let message = message.unwrap_or_else(|| REGISTRATION_FAILED.to_owned());
                state.alerts.show(message, Severity::Danger);
            }
            Err(e) => {
                error!("Registration error: {}", e);
                state.alerts.show(NETWORK_ERROR, Severity::Danger);
            }
        }
    }

    pub async fn logout(&self) {
        match self.api.logout().await {
            Ok(()) => {
                let mut state = self.state();
                state.session.clear();
                state.pending_vote = None;
                state.vote_controls_enabled = false;
                enter_view(&mut state, View::Homepage);
                state.alerts.show(LOGGED_OUT, Severity::Info);
            }
            Err(ApiError::Status(status)) => error!("Logout refused: {}", status),
            Err(e) => {
                error!("Logout error: {}", e);
                self.alert(LOGOUT_FAILED, Severity::Danger);
            }
        }
    }

    /// The homepage call to action.
    pub async fn vote_now(&self) {
        let (authenticated, voted) = {
            let state = self.state();
            (state.session.is_authenticated(), state.session.has_voted())
        };
        if !authenticated {
            self.open_modal(Modal::Login);
        } else if voted {
            self.alert(ALREADY_VOTED_THANKS, Severity::Warning);
            self.show_results().await;
        } else {
            self.show_voting_dashboard().await;
        }
    }

    /// Checks the vote guards and, if they pass, asks the user to confirm.
    pub fn request_vote(&self, candidate_id: u32) {
        let mut state = self.state();
        match vote_guard(&state) {
            Err(ValidationError::NotAuthenticated) => {
                state
                    .alerts
                    .show(ValidationError::NotAuthenticated.to_string(), Severity::Danger);
                state.modal = Some(Modal::Login);
            }
            Err(e) => state.alerts.show(e.to_string(), Severity::Warning),
            Ok(()) => {
                let candidate_name = state
                    .candidates
                    .get(&candidate_id)
                    .map(CandidateCard::display_name)
                    .unwrap_or_else(|| format!("Candidate {candidate_id}"));
                state.pending_vote = Some(PendingVote {
                    candidate_id,
                    candidate_name,
                });
            }
        }
    }

    pub fn cancel_vote(&self) {
        if let Some(pending) = self.state().pending_vote.take() {
            info!("Vote for candidate {} cancelled", pending.candidate_id);
        }
    }

    pub async fn confirm_vote(&self) {
        let (candidate_id, duration) = {
            let mut state = self.state();
            let Some(pending) = state.pending_vote.take() else {
                return;
            };
            let duration = state
                .session
                .voting_duration(Instant::now(), self.config.fallback_vote_duration);
            (pending.candidate_id, duration)
        };
        self.cast_vote(candidate_id, duration).await;
    }

    pub async fn cast_vote(&self, candidate_id: u32, voting_duration: f64) {
        let voter = {
            let mut state = self.state();
            if let Err(e) = vote_guard(&state) {
                warn!("Vote blocked: {}", e);
                state.alerts.show(e.to_string(), Severity::Warning);
                return;
            }
            if state.vote_in_flight {
                debug!("Vote already in flight, ignoring");
                return;
            }
            state.vote_in_flight = true;
            state.alerts.show(PROCESSING_VOTE, Severity::Info);
            state.session.user.as_ref().map(|user| user.email.clone())
        };

        let request = VoteRequest {
            candidate_id,
            voting_duration,
        };
        let result = self
            .api
            .vote(request)
            .await
            .and_then(VoteResponse::into_result);

        let recorded = {
            let mut state = self.state();
            state.vote_in_flight = false;
            // the outcome belongs to whoever cast it, not whoever is signed in now
            let signed_in = state.session.user.as_ref().map(|user| &user.email);
            let same_voter = signed_in == voter.as_ref();
            match result {
                _ if !same_voter => {
                    warn!("Vote response for {:?} arrived after the voter signed out", voter);
                    false
                }
                Ok(()) => {
                    state.session.mark_voted();
                    state.vote_controls_enabled = false;
                    state.alerts.show(VOTE_RECORDED, Severity::Success);
                    true
                }
                Err(ApiError::FraudFlagged { message }) => {
                    warn!("Vote flagged by server: {:?}", message);
                    state.alerts.show(VOTE_FLAGGED, Severity::Warning);
                    false
                }
                Err(ApiError::Rejected { message }) => {
                    let message = message.unwrap_or_else(|| VOTE_FAILED.to_owned());
                    state.alerts.show(message, Severity::Danger);
                    false
                }
                Err(e) => {
                    error!("Voting error: {}", e);
                    state.alerts.show(VOTE_NETWORK_ERROR, Severity::Danger);
                    false
                }
            }
        };

        if recorded {
            self.refresh_admin_stats().await;
            self.schedule_results();
        }
    }

    fn schedule_results(&self) {
        let controller = self.clone();
        let delay = self.config.results_delay;
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            controller.show_results().await;
        });
    }

    pub fn show_homepage(&self) {
        enter_view(&mut self.state(), View::Homepage);
    }

    fn enter_voting_dashboard(&self) {
        let mut state = self.state();
        enter_view(&mut state, View::VotingDashboard);
        state.session.start_vote_timer(Instant::now());
        if state.session.is_authenticated() && !state.session.has_voted() {
            state.vote_controls_enabled = true;
        }
    }

    pub async fn show_voting_dashboard(&self) {
        self.enter_voting_dashboard();
        self.load_results().await;
    }

    /// Results share the dashboard; only the notice differs.
    pub async fn show_results(&self) {
        self.enter_voting_dashboard();
        self.alert(RESULTS_SHOWN, Severity::Info);
        self.load_results().await;
    }

    pub async fn show_admin_panel(&self) {
        {
            let mut state = self.state();
            if !state.session.is_admin() {
                state
                    .alerts
                    .show(ValidationError::NotAdmin.to_string(), Severity::Danger);
                return;
            }
            enter_view(&mut state, View::AdminPanel);
            if state.charts.is_none() {
                state.charts = Some(Charts::new());
            }
        }
        // candidate names label the distribution chart
        self.load_results().await;
        self.refresh_admin_stats().await;
        self.start_stats_poller();
    }

    fn start_stats_poller(&self) {
        let mut state = self.state();
        if state.view != View::AdminPanel || state.stats_poller.is_some() {
            return;
        }
        let controller = self.clone();
        let handle = spawn_poller(&self.runtime, self.config.stats_interval, move || {
            let controller = controller.clone();
            async move { controller.refresh_admin_stats().await }
        });
        state.stats_poller = Some(handle);
    }

    pub async fn load_results(&self) {
        match self.api.results().await {
            Ok(results) => {
                let mut state = self.state();
                for (id, result) in results {
                    state
                        .candidates
                        .entry(id)
                        .or_insert_with(|| CandidateCard::new(id))
                        .apply(result);
                }
            }
            Err(e) => error!("Error loading results: {}", e),
        }
    }

    pub async fn refresh_admin_stats(&self) {
        let stats = match self.api.stats().await {
            Ok(stats) => stats,
            Err(e) => {
                error!("Error fetching stats: {}", e);
                return;
            }
        };
        let charts_exist = {
            let mut state = self.state();
            state.stats = StatsDisplay::from(&stats);
            state.charts.is_some()
        };
        if charts_exist {
            self.refresh_charts().await;
        }
    }

    pub async fn refresh_charts(&self) {
        match self.api.voting_patterns().await {
            Ok(patterns) => {
                let mut guard = self.state();
                let state = &mut *guard;
                if let Some(charts) = state.charts.as_mut() {
                    charts.apply_patterns(&patterns, &state.candidates);
                }
            }
            Err(e) => error!("Error updating charts: {}", e),
        }
    }

    pub fn open_modal(&self, modal: Modal) {
        self.state().modal = Some(modal);
    }

    pub fn close_modals(&self) {
        self.state().modal = None;
    }
}

/// The admin poller only lives while the admin panel is shown.
fn enter_view(state: &mut AppState, view: View) {
    if view != View::AdminPanel {
        if let Some(poller) = state.stats_poller.take() {
            poller.stop();
        }
    }
    state.view = view;
}

fn vote_guard(state: &AppState) -> Result<(), ValidationError> {
    if !state.session.is_authenticated() {
        return Err(ValidationError::NotAuthenticated);
    }
    if state.session.has_voted() {
        return Err(ValidationError::AlreadyVoted);
    }
    Ok(())
}
