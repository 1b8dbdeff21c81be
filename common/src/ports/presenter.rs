use async_trait::async_trait;

/// The view is owned by a single execution context, so the future returned
/// here is not required to be `Send`.
#[async_trait(?Send)]
pub trait EmployeePresenter {
    /// Runs one full load cycle and reports every step to the view.
    async fn fetch_employees(&mut self);
}
