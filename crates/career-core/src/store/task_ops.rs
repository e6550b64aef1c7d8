//! Task operations for the PlanStore.

use log::debug;

use super::PlanStore;
use crate::{
    error::{PlannerError, Result},
    models::{clean_optional_title, clean_title, Task},
    params::{AddTask, TaskPath},
};

impl PlanStore {
    /// Appends a task to a day. Without a title the task is called
    /// `Task {n}`, `n` being its 1-based position.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When a title is given but blank
    /// * `PlannerError::YearNotFound` / `PlannerError::MonthNotFound` /
    ///   `PlannerError::DayNotFound` - When the path does not resolve
    pub fn add_task(&mut self, params: &AddTask) -> Result<Task> {
        let title = clean_optional_title(params.title.as_deref())?;
        let day = self.day_mut(&params.day)?;

        let title = title.unwrap_or_else(|| format!("Task {}", day.tasks.len() + 1));
        let task = Task::new(title);
        day.tasks.push(task.clone());

        debug!("Added task {} to day {}", task.id, params.day.day_id);
        self.persist();
        Ok(task)
    }

    /// Removes a task from its day.
    ///
    /// # Errors
    ///
    /// * `PlannerError::TaskNotFound` (or a parent variant) - When the path
    ///   does not resolve
    pub fn remove_task(&mut self, path: &TaskPath) -> Result<Task> {
        let day = self.day_mut(&path.day())?;
        let index = day
            .tasks
            .iter()
            .position(|task| task.id == path.task_id)
            .ok_or_else(|| PlannerError::TaskNotFound {
                id: path.task_id.clone(),
            })?;

        let task = day.tasks.remove(index);

        debug!("Removed task {}", task.id);
        self.persist();
        Ok(task)
    }

    /// Flips a task's completion and returns the new value.
    ///
    /// # Errors
    ///
    /// * `PlannerError::TaskNotFound` (or a parent variant) - When the path
    ///   does not resolve
    pub fn toggle_task_completion(&mut self, path: &TaskPath) -> Result<bool> {
        let task = self.task_mut(path)?;
        task.is_completed = !task.is_completed;
        let completed = task.is_completed;

        debug!("Task {} completed: {completed}", path.task_id);
        self.persist();
        Ok(completed)
    }

    /// Sets a task's title to the trimmed `new_title`.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the trimmed title is empty; the
    ///   task keeps its old title
    /// * `PlannerError::TaskNotFound` (or a parent variant) - When the path
    ///   does not resolve
    pub fn edit_task_title(&mut self, path: &TaskPath, new_title: &str) -> Result<Task> {
        let title = clean_title(new_title)?;
        let task = self.task_mut(path)?;

        task.title = title;
        let task = task.clone();

        self.persist();
        Ok(task)
    }
}
