//! # Ports Layer (Boundaries)
//!
//! Defines the contracts (traits) that isolate the presenter from the
//! infrastructure on both of its sides.
//!
//! ## Types of Ports
//! * **[`gateway`]** (Driven): where the employee list comes from.
//! * **[`view`]** (Driven): where loading state, rows and errors go.
//! * **[`presenter`]** (Driving): the single use case exposed to the shell.
//!
//! ## Dependency Rule
//! * The presenter depends on these ports only.
//! * `roster-core` and `roster-cli` implement them.
//! * Tests substitute fakes at exactly these seams.

pub mod gateway;
pub mod presenter;
pub mod view;

pub use gateway::EmployeeGateway;
pub use presenter::EmployeePresenter;
pub use view::EmployeeView;
