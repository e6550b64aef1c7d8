//! Month operations for the PlanStore.

use log::debug;

use super::PlanStore;
use crate::{
    error::{PlannerError, Result},
    models::{clean_optional_title, EditNode, Month},
    params::{AddMonth, MonthPath},
};

impl PlanStore {
    /// Appends a month to a year, numbered after the year's month count, and
    /// marks it expanded.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When a title is given but blank
    /// * `PlannerError::YearNotFound` - When the year does not exist
    pub fn add_month(&mut self, params: &AddMonth) -> Result<Month> {
        let title = clean_optional_title(params.title.as_deref())?;
        let year = self.year_mut(params.year_id.as_str())?;

        let month_number = u32::try_from(year.months.len() + 1).unwrap_or(u32::MAX);
        let mut month = Month::new(month_number);
        if let Some(title) = title {
            month.title = title;
        }
        if let Some(description) = &params.description {
            month.description = description.clone();
        }
        year.months.push(month.clone());

        self.expansion.expand_month(&params.year_id, &month.id);

        debug!("Added month {} ({}) to year {}", month.month_number, month.id, params.year_id);
        self.persist();
        Ok(month)
    }

    /// Removes a month with its days and tasks, and drops its expansion
    /// entry. Later months keep their numbers.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` - When
    ///   the path does not resolve
    pub fn remove_month(&mut self, path: &MonthPath) -> Result<Month> {
        let year = self.year_mut(path.year_id.as_str())?;
        let index = year
            .months
            .iter()
            .position(|month| month.id == path.month_id)
            .ok_or_else(|| PlannerError::MonthNotFound {
                id: path.month_id.clone(),
            })?;

        let month = year.months.remove(index);
        self.expansion
            .purge_month(path.year_id.as_str(), path.month_id.as_str());

        debug!("Removed month {} with {} days", month.id, month.days.len());
        self.persist();
        Ok(month)
    }

    /// Replaces a month's title and/or description.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the new title is blank
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` - When
    ///   the path does not resolve
    pub fn edit_month(&mut self, path: &MonthPath, edit: &EditNode) -> Result<Month> {
        let title = edit.validated_title()?;
        let month = self.month_mut(path)?;

        if let Some(title) = title {
            month.title = title;
        }
        if let Some(description) = &edit.description {
            month.description = description.clone();
        }
        let month = month.clone();

        if !edit.is_empty() {
            self.persist();
        }
        Ok(month)
    }

    /// Flips a month's own completion flag and returns the new value.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` - When
    ///   the path does not resolve
    pub fn toggle_month_completion(&mut self, path: &MonthPath) -> Result<bool> {
        let month = self.month_mut(path)?;
        month.is_completed = !month.is_completed;
        let completed = month.is_completed;

        self.persist();
        Ok(completed)
    }
}
