use roster_common::employee::Employee;
use roster_common::ports::{EmployeeGateway, EmployeePresenter, EmployeeView};
use roster_core::gateway::HttpEmployeeGateway;
use roster_core::presenter::{Presenter, PresenterState};
use roster_core::remote::RemoteDataSource;

use crate::support::{self, OneShotServer, THREE_EMPLOYEES};

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Loading,
    Loaded,
    Rows(Vec<String>),
    Error(String),
}

#[derive(Default)]
struct ScriptView {
    events: Vec<Event>,
}

impl EmployeeView for ScriptView {
    fn show_loading(&mut self) {
        self.events.push(Event::Loading);
    }

    fn hide_loading(&mut self) {
        self.events.push(Event::Loaded);
    }

    fn show_employees(&mut self, employees: Vec<Employee>) {
        self.events
            .push(Event::Rows(employees.into_iter().map(|e| e.name).collect()));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }
}

fn http_gateway(cfg: &roster_common::config::Config) -> HttpEmployeeGateway {
    HttpEmployeeGateway::new(RemoteDataSource::new(cfg).unwrap())
}

#[tokio::test]
async fn http_success_reaches_the_view() {
    let server = OneShotServer::start(200, THREE_EMPLOYEES).await;
    let mut presenter = Presenter::new(ScriptView::default(), http_gateway(&server.config()));

    presenter.fetch_employees().await;

    assert_eq!(presenter.state(), PresenterState::Success);
    assert_eq!(
        presenter.into_view().events,
        vec![
            Event::Loading,
            Event::Loaded,
            Event::Rows(vec![
                "Ada Lovelace".into(),
                "Alan Turing".into(),
                "Grace Hopper".into()
            ]),
        ]
    );
}

#[tokio::test]
async fn http_error_status_reaches_the_view_as_message() {
    let server = OneShotServer::start(503, "").await;
    let mut presenter = Presenter::new(ScriptView::default(), http_gateway(&server.config()));

    presenter.fetch_employees().await;

    assert_eq!(presenter.state(), PresenterState::Failed);
    assert_eq!(
        presenter.into_view().events,
        vec![
            Event::Loading,
            Event::Loaded,
            Event::Error("Failed to fetch data".into())
        ]
    );
}

#[tokio::test]
async fn gateway_outcome_always_has_exactly_one_side() {
    let ok = OneShotServer::start(200, THREE_EMPLOYEES).await;
    let bad = OneShotServer::start(500, "").await;
    let garbage = OneShotServer::start(200, "not json").await;

    let configs = vec![
        ok.config(),
        bad.config(),
        garbage.config(),
        support::closed_port_config().await,
    ];

    for cfg in &configs {
        let outcome = http_gateway(cfg).get_employees().await;
        assert!(
            outcome.employees().is_some() != outcome.error().is_some(),
            "outcome for {} carried both or neither: {outcome:?}",
            cfg.endpoint_url()
        );
    }
}
