//! Day operations for the PlanStore.

use log::debug;

use super::{default_day_date, PlanStore};
use crate::{
    error::{PlannerError, Result},
    models::{clean_optional_title, Day, EditNode},
    params::{AddDay, DayPath},
};

impl PlanStore {
    /// Appends a day to a month. The day starts with one seed task.
    ///
    /// Without an explicit date the day is placed on the first of the
    /// month's number in the reference year, offset by its position.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When a title is given but blank
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` - When
    ///   the path does not resolve
    pub fn add_day(&mut self, params: &AddDay) -> Result<Day> {
        let title = clean_optional_title(params.title.as_deref())?;
        let today = self.today();
        let month = self.month_mut(&params.month)?;

        let position = month.days.len();
        let date = params
            .date
            .unwrap_or_else(|| default_day_date(today, month.month_number, position));

        let mut day = Day::new(position, date);
        if let Some(title) = title {
            day.title = title;
        }
        if let Some(description) = &params.description {
            day.description = description.clone();
        }
        month.days.push(day.clone());

        debug!("Added day {} on {} to month {}", day.id, day.date, params.month.month_id);
        self.persist();
        Ok(day)
    }

    /// Removes a day with its tasks.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` /
    ///   `PlannerError::DayNotFound` - When the path does not resolve
    pub fn remove_day(&mut self, path: &DayPath) -> Result<Day> {
        let month = self.month_mut(&path.month())?;
        let index = month
            .days
            .iter()
            .position(|day| day.id == path.day_id)
            .ok_or_else(|| PlannerError::DayNotFound {
                id: path.day_id.clone(),
            })?;

        let day = month.days.remove(index);

        debug!("Removed day {} with {} tasks", day.id, day.tasks.len());
        self.persist();
        Ok(day)
    }

    /// Replaces a day's title and/or description. The date stays fixed.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the new title is blank
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` /
    ///   `PlannerError::DayNotFound` - When the path does not resolve
    pub fn edit_day(&mut self, path: &DayPath, edit: &EditNode) -> Result<Day> {
        let title = edit.validated_title()?;
        let day = self.day_mut(path)?;

        if let Some(title) = title {
            day.title = title;
        }
        if let Some(description) = &edit.description {
            day.description = description.clone();
        }
        let day = day.clone();

        if !edit.is_empty() {
            self.persist();
        }
        Ok(day)
    }

    /// Flips a day's own completion flag and returns the new value. Its
    /// tasks are left alone.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` /
    ///   `PlannerError::DayNotFound` - When the path does not resolve
    pub fn toggle_day_completion(&mut self, path: &DayPath) -> Result<bool> {
        let day = self.day_mut(path)?;
        day.is_completed = !day.is_completed;
        let completed = day.is_completed;

        self.persist();
        Ok(completed)
    }
}
