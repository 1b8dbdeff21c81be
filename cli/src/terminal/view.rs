//! # Terminal View
//!
//! Terminal implementation of the [`EmployeeView`] port. Owns the list
//! adapter and the loading spinner; nothing else writes rows to the screen.

use colored::*;
use indicatif::ProgressBar;
use roster_common::config::Config;
use roster_common::employee::Employee;
use roster_common::ports::EmployeeView;

use crate::terminal::adapter::{EmployeeAdapter, EmployeeRow};
use crate::terminal::{colors, format, print, spinner};

const LOADING_MESSAGE: &str = "Fetching employees...";

pub struct TerminalView {
    adapter: EmployeeAdapter,
    loading: Option<ProgressBar>,
    quiet: u8,
    /// Rows drawn by the most recent render, in screen order.
    frame: Vec<EmployeeRow>,
}

impl TerminalView {
    pub fn new(cfg: &Config) -> Self {
        Self {
            adapter: EmployeeAdapter::new(Vec::new()),
            loading: None,
            quiet: cfg.quiet,
            frame: Vec::new(),
        }
    }

    pub fn adapter(&self) -> &EmployeeAdapter {
        &self.adapter
    }

    pub fn frame(&self) -> &[EmployeeRow] {
        &self.frame
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    fn render(&mut self) {
        if !self.adapter.take_redraw() {
            return;
        }

        self.frame = self.adapter.rows().collect();

        if self.frame.is_empty() {
            print::header("zero employees listed", self.quiet);
            print::print(&"The directory returned no employees.".dimmed().to_string());
            return;
        }

        print::header("employee directory", self.quiet);
        match self.quiet {
            2 => self.print_compact(),
            _ => self.print_tree(),
        }
        self.print_summary();
    }

    fn print_tree(&self) {
        for (idx, row) in self.frame.iter().enumerate() {
            print::tree_head(idx, format::display_name(row));
            print::leaves(&[format::profile_to_detail(row)]);
            if idx + 1 != self.frame.len() {
                print::blank();
            }
        }
    }

    fn print_compact(&self) {
        let width: usize = format::name_width(self.frame.iter());
        for row in &self.frame {
            print::print(&format::compact_line(row, width));
        }
    }

    fn print_summary(&self) {
        if self.quiet > 0 {
            return;
        }
        let count: ColoredString = format!("{} employees", self.frame.len()).bold().green();
        let output: ColoredString =
            format!("Directory loaded: {count} listed").color(colors::TEXT_DEFAULT);
        print::separator(self.quiet);
        print::centerln(&output.to_string());
    }
}

impl EmployeeView for TerminalView {
    fn show_loading(&mut self) {
        if let Some(previous) = self.loading.take() {
            spinner::stop_loading(previous);
        }
        self.loading = Some(spinner::start_loading(LOADING_MESSAGE, self.quiet > 1));
    }

    fn hide_loading(&mut self) {
        if let Some(pb) = self.loading.take() {
            spinner::stop_loading(pb);
        }
    }

    fn show_employees(&mut self, employees: Vec<Employee>) {
        self.adapter.update_data(employees);
        self.render();
    }

    fn show_error(&mut self, message: &str) {
        print::notice(message);
    }
}
