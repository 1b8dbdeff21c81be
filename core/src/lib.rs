//! # Roster Core
//!
//! The fetch pipeline behind the directory screen:
//!
//! * **[`remote`]**: issues the HTTP GET and decodes the payload.
//! * **[`gateway`]**: adapts data sources to the [`EmployeeGateway`] port.
//! * **[`presenter`]**: drives an [`EmployeeView`] through one load cycle.
//!
//! [`EmployeeGateway`]: roster_common::ports::EmployeeGateway
//! [`EmployeeView`]: roster_common::ports::EmployeeView

pub mod gateway;
pub mod presenter;
pub mod remote;
