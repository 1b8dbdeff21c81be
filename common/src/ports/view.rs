use crate::employee::Employee;

pub trait EmployeeView {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    /// Replaces whatever is currently shown with `employees`.
    fn show_employees(&mut self, employees: Vec<Employee>);
    /// Surfaces `message` without touching the rendered list.
    fn show_error(&mut self, message: &str);
}
