//! Plan and year operations for the PlanStore.

use log::debug;

use super::PlanStore;
use crate::{
    error::{PlannerError, Result},
    models::{EditNode, Year},
};

impl PlanStore {
    /// Replaces the plan's own title and/or description.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the new title is blank
    pub fn edit_plan(&mut self, edit: &EditNode) -> Result<()> {
        let title = edit.validated_title()?;
        if edit.is_empty() {
            return Ok(());
        }

        if let Some(title) = title {
            self.plan.title = title;
        }
        if let Some(description) = &edit.description {
            self.plan.description = description.clone();
        }

        debug!("Edited plan {}", self.plan.id);
        self.persist();
        Ok(())
    }

    /// Appends a new year numbered after the current year count and marks it
    /// expanded. Always succeeds.
    pub fn add_year(&mut self) -> Year {
        let year_number = u32::try_from(self.plan.years.len() + 1).unwrap_or(u32::MAX);
        let year = Year::new(year_number);

        self.expansion.expand_year(&year.id);
        self.plan.years.push(year.clone());

        debug!("Added year {} ({})", year.year_number, year.id);
        self.persist();
        year
    }

    /// Removes a year with everything below it, including the expansion
    /// entries of the year and its months. Later years keep their numbers.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` - When the year does not exist
    pub fn remove_year(&mut self, year_id: &str) -> Result<Year> {
        let index = self
            .plan
            .years
            .iter()
            .position(|year| year.id.as_str() == year_id)
            .ok_or_else(|| PlannerError::YearNotFound { id: year_id.into() })?;

        let year = self.plan.years.remove(index);
        self.expansion.purge_year(year_id);

        debug!("Removed year {} with {} months", year.id, year.months.len());
        self.persist();
        Ok(year)
    }

    /// Replaces a year's title and/or description.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the new title is blank
    /// * `PlannerError::YearNotFound` - When the year does not exist
    pub fn edit_year(&mut self, year_id: &str, edit: &EditNode) -> Result<Year> {
        let title = edit.validated_title()?;
        let year = self.year_mut(year_id)?;

        if let Some(title) = title {
            year.title = title;
        }
        if let Some(description) = &edit.description {
            year.description = description.clone();
        }
        let year = year.clone();

        if !edit.is_empty() {
            self.persist();
        }
        Ok(year)
    }

    /// Flips a year's own completion flag and returns the new value. Months
    /// and tasks below it are left alone.
    ///
    /// # Errors
    ///
    /// * `PlannerError::YearNotFound` - When the year does not exist
    pub fn toggle_year_completion(&mut self, year_id: &str) -> Result<bool> {
        let year = self.year_mut(year_id)?;
        year.is_completed = !year.is_completed;
        let completed = year.is_completed;

        self.persist();
        Ok(completed)
    }
}
