//! Maps the ordered employee list onto printable rows.
//!
//! The adapter never diffs: every [`EmployeeAdapter::update_data`] replaces
//! the whole backing list and invalidates every row.

use roster_common::employee::Employee;

/// Reusable holder for the two text fields of a row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeRow {
    pub name: String,
    pub profile: String,
}

#[derive(Debug, Default)]
pub struct EmployeeAdapter {
    employees: Vec<Employee>,
    needs_redraw: bool,
}

impl EmployeeAdapter {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            needs_redraw: false,
        }
    }

    pub fn item_count(&self) -> usize {
        self.employees.len()
    }

    pub fn create_row(&self) -> EmployeeRow {
        EmployeeRow::default()
    }

    /// Writes the record at `position` into `row`. Returns `false` and leaves
    /// `row` alone when `position` is out of range.
    pub fn bind(&self, position: usize, row: &mut EmployeeRow) -> bool {
        let Some(employee) = self.employees.get(position) else {
            return false;
        };
        row.name.clone_from(&employee.name);
        row.profile.clone_from(&employee.profile);
        true
    }

    pub fn rows(&self) -> impl Iterator<Item = EmployeeRow> + '_ {
        (0..self.item_count()).map(|position| {
            let mut row = self.create_row();
            self.bind(position, &mut row);
            row
        })
    }

    pub fn update_data(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.notify_data_set_changed();
    }

    /// Reports and clears the pending full-redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn notify_data_set_changed(&mut self) {
        self.needs_redraw = true;
    }
}
