use anyhow::Context;
use roster_common::config::Config;
use roster_common::ports::EmployeePresenter;
use roster_core::gateway::HttpEmployeeGateway;
use roster_core::presenter::Presenter;
use roster_core::remote::RemoteDataSource;
use tracing::{Instrument, info_span};

use crate::terminal::view::TerminalView;

/// Wires the screen and runs one load cycle. A failed fetch is shown to the
/// user and is not an error here.
pub async fn list(cfg: &Config) -> anyhow::Result<()> {
    let source = RemoteDataSource::new(cfg).context("cannot reach the employee directory")?;
    let span = info_span!("list", url = %source.url());

    let gateway = HttpEmployeeGateway::new(source);
    let mut presenter = Presenter::new(TerminalView::new(cfg), gateway);
    presenter.fetch_employees().instrument(span).await;

    Ok(())
}
