//! # Employee Presenter
//!
//! Owns the `Idle -> Loading -> (Success | Failed)` transitions and is the
//! only thing that talks to the view.
//!
//! `fetch_employees` borrows the presenter mutably for the whole round trip,
//! so two fetches can never overlap on the same instance. Callers sharing a
//! presenter behind a lock are queued by that lock. Once a fetch finishes,
//! another one starts again from `Loading`.

use async_trait::async_trait;
use roster_common::outcome::FetchOutcome;
use roster_common::ports::{EmployeeGateway, EmployeePresenter, EmployeeView};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenterState {
    Idle,
    Loading,
    Success,
    Failed,
}

pub struct Presenter<V, G> {
    view: V,
    gateway: G,
    state: PresenterState,
}

impl<V, G> Presenter<V, G>
where
    V: EmployeeView,
    G: EmployeeGateway,
{
    pub fn new(view: V, gateway: G) -> Self {
        Self {
            view,
            gateway,
            state: PresenterState::Idle,
        }
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn complete(&mut self, outcome: FetchOutcome) {
        self.view.hide_loading();
        match outcome {
            FetchOutcome::Loaded(employees) => {
                info!(count = employees.len(), "employees loaded");
                self.state = PresenterState::Success;
                self.view.show_employees(employees);
            }
            FetchOutcome::Failed(message) => {
                debug!(error = %message, "could not load employees");
                self.state = PresenterState::Failed;
                self.view.show_error(&message);
            }
        }
    }
}

#[async_trait(?Send)]
impl<V, G> EmployeePresenter for Presenter<V, G>
where
    V: EmployeeView,
    G: EmployeeGateway,
{
    async fn fetch_employees(&mut self) {
        debug!(from = ?self.state, "fetch requested");
        self.state = PresenterState::Loading;
        self.view.show_loading();

        let outcome = self.gateway.get_employees().await;
        self.complete(outcome);
    }
}
