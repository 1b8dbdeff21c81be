use crate::terminal::adapter::EmployeeRow;
use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub type Detail = (String, ColoredString);

pub const NAME_PLACEHOLDER: &str = "Unnamed";
pub const PROFILE_PLACEHOLDER: &str = "No profile";

pub fn display_name(row: &EmployeeRow) -> &str {
    if row.name.trim().is_empty() {
        NAME_PLACEHOLDER
    } else {
        row.name.as_str()
    }
}

pub fn profile_to_detail(row: &EmployeeRow) -> Detail {
    let value: ColoredString = if row.profile.trim().is_empty() {
        PROFILE_PLACEHOLDER.dimmed()
    } else {
        row.profile.as_str().color(colors::PROFILE)
    };
    (String::from("Profile"), value)
}

/// Single-line form used at the highest quiet level, name padded to `width`.
pub fn compact_line(row: &EmployeeRow, width: usize) -> String {
    let name: &str = display_name(row);
    let pad: usize = width.saturating_sub(UnicodeWidthStr::width(name));
    format!("{}{} {}", name, " ".repeat(pad), row.profile)
}

pub fn name_width<'a>(rows: impl Iterator<Item = &'a EmployeeRow>) -> usize {
    rows.map(|row| UnicodeWidthStr::width(display_name(row)))
        .max()
        .unwrap_or(0)
}
