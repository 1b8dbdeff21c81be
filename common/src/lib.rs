//! # Roster Common
//!
//! Types shared by every layer of `roster`: the employee data model, the
//! fetch error and outcome types, runtime configuration and the **ports**
//! (traits) that keep the presenter independent of the network client and
//! of the terminal.

pub mod config;
pub mod employee;
pub mod error;
pub mod outcome;
pub mod ports;
