//! Wrappers for displaying groups of query results.

use std::fmt;

use jiff::civil::Date;

use super::datetime::LongDate;
use crate::query::DatedTask;

/// Tasks scheduled on one date, grouped under their day headings.
///
/// # Examples
///
/// ```rust
/// use career_core::display::DatedTasks;
/// use jiff::civil::date;
///
/// let output = DatedTasks::new(date(2024, 1, 1), vec![]).to_string();
/// assert!(output.contains("No tasks scheduled on Mon, Jan 1, 2024."));
/// ```
pub struct DatedTasks {
    pub date: Date,
    pub tasks: Vec<DatedTask>,
}

impl DatedTasks {
    pub fn new(date: Date, tasks: Vec<DatedTask>) -> Self {
        Self { date, tasks }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl fmt::Display for DatedTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", LongDate(&self.date))?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            return writeln!(f, "No tasks scheduled on {}.", LongDate(&self.date));
        }

        let mut current_day = None;
        for dated in &self.tasks {
            if current_day != Some(&dated.path.day_id) {
                if current_day.is_some() {
                    writeln!(f)?;
                }
                writeln!(
                    f,
                    "## {} / {} / {}",
                    dated.year_title, dated.month_title, dated.day_title
                )?;
                writeln!(f)?;
                current_day = Some(&dated.path.day_id);
            }
            write!(f, "{}", dated.task)?;
        }
        Ok(())
    }
}
