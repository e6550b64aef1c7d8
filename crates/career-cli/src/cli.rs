//! Command handlers for the career CLI
//!
//! [`Cli`] owns the [`PlanStore`] for the duration of one command. Each
//! handler resolves positions against the current plan, calls one store
//! operation and renders the outcome as markdown.

use anyhow::{Context, Result};
use career_core::{
    display::{
        CreateResult, DatedTasks, DeleteResult, OperationStatus, PlanTree, UpdateResult,
    },
    params::TaskPath,
    PlanStore,
};
use log::warn;

use crate::{
    args::{
        DayCommands, EditArgs, MonthCommands, OnArgs, PlanCommands, ShowArgs, TaskCommands,
        YearCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlanStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn show(&self, args: &ShowArgs) -> Result<()> {
        self.render_load_error()?;
        let plan = self.store.plan();
        let tree = if args.all {
            PlanTree::full(plan)
        } else {
            PlanTree::with_expansion(plan, self.store.expansion())
        };
        self.renderer.render(&tree.to_string())
    }

    pub fn stats(&self) -> Result<()> {
        self.render_load_error()?;
        self.renderer.render(&self.store.stats().to_string())
    }

    pub fn tasks_on(&self, args: &OnArgs) -> Result<()> {
        self.render_load_error()?;
        let date = args.date.unwrap_or_else(|| self.store.today());
        let tasks = DatedTasks::new(date, self.store.tasks_on_date(date));
        self.renderer.render(&tasks.to_string())
    }

    pub fn handle_plan_command(mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Edit(edit) => {
                let changes = describe_changes(&edit);
                self.store
                    .edit_plan(&edit.into())
                    .context("Failed to edit plan")?;
                let mut output = OperationStatus::success("Updated plan".to_string()).to_string();
                for change in changes {
                    output.push_str(&format!("- {change}\n"));
                }
                self.finish(&output)
            }
        }
    }

    pub fn handle_year_command(mut self, command: YearCommands) -> Result<()> {
        match command {
            YearCommands::Add => {
                let year = self.store.add_year();
                self.finish(&CreateResult::new(year).to_string())
            }
            YearCommands::Remove(position) => {
                let year_id = position.locate(self.store.plan())?;
                let year = self
                    .store
                    .remove_year(year_id.as_str())
                    .context("Failed to remove year")?;
                self.finish(&DeleteResult::new(year).to_string())
            }
            YearCommands::Done(position) => {
                let year_id = position.locate(self.store.plan())?;
                let completed = self
                    .store
                    .toggle_year_completion(year_id.as_str())
                    .context("Failed to update year")?;
                let title = self.title_of_year(year_id.as_str());
                self.finish(&completion_status("Year", &title, completed))
            }
            YearCommands::Edit { position, edit } => {
                let year_id = position.locate(self.store.plan())?;
                let changes = describe_changes(&edit);
                let year = self
                    .store
                    .edit_year(year_id.as_str(), &edit.into())
                    .context("Failed to edit year")?;
                self.finish(&UpdateResult::with_changes(year, changes).to_string())
            }
            YearCommands::Toggle(position) => {
                let year_id = position.locate(self.store.plan())?;
                let expanded = self
                    .store
                    .toggle_year_expansion(year_id.as_str())
                    .context("Failed to toggle year")?;
                let title = self.title_of_year(year_id.as_str());
                self.finish(&expansion_status("Year", &title, expanded))
            }
        }
    }

    pub fn handle_month_command(mut self, command: MonthCommands) -> Result<()> {
        match command {
            MonthCommands::Add(args) => {
                let year_id = args.position.locate(self.store.plan())?;
                let month = self
                    .store
                    .add_month(&args.into_params(year_id))
                    .context("Failed to add month")?;
                self.finish(&CreateResult::new(month).to_string())
            }
            MonthCommands::Remove(position) => {
                let path = position.locate(self.store.plan())?;
                let month = self
                    .store
                    .remove_month(&path)
                    .context("Failed to remove month")?;
                self.finish(&DeleteResult::new(month).to_string())
            }
            MonthCommands::Done(position) => {
                let path = position.locate(self.store.plan())?;
                let completed = self
                    .store
                    .toggle_month_completion(&path)
                    .context("Failed to update month")?;
                let title = self.title_of(path.year_id.as_str(), Some(path.month_id.as_str()), None);
                self.finish(&completion_status("Month", &title, completed))
            }
            MonthCommands::Edit { position, edit } => {
                let path = position.locate(self.store.plan())?;
                let changes = describe_changes(&edit);
                let month = self
                    .store
                    .edit_month(&path, &edit.into())
                    .context("Failed to edit month")?;
                self.finish(&UpdateResult::with_changes(month, changes).to_string())
            }
            MonthCommands::Toggle(position) => {
                let path = position.locate(self.store.plan())?;
                let expanded = self
                    .store
                    .toggle_month_expansion(&path)
                    .context("Failed to toggle month")?;
                let title = self.title_of(path.year_id.as_str(), Some(path.month_id.as_str()), None);
                self.finish(&expansion_status("Month", &title, expanded))
            }
        }
    }

    pub fn handle_day_command(mut self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Add(args) => {
                let month = args.position.locate(self.store.plan())?;
                let day = self
                    .store
                    .add_day(&args.into_params(month))
                    .context("Failed to add day")?;
                self.finish(&CreateResult::new(day).to_string())
            }
            DayCommands::Remove(position) => {
                let path = position.locate(self.store.plan())?;
                let day = self
                    .store
                    .remove_day(&path)
                    .context("Failed to remove day")?;
                self.finish(&DeleteResult::new(day).to_string())
            }
            DayCommands::Done(position) => {
                let path = position.locate(self.store.plan())?;
                let completed = self
                    .store
                    .toggle_day_completion(&path)
                    .context("Failed to update day")?;
                let title = self.title_of(
                    path.year_id.as_str(),
                    Some(path.month_id.as_str()),
                    Some(path.day_id.as_str()),
                );
                self.finish(&completion_status("Day", &title, completed))
            }
            DayCommands::Edit { position, edit } => {
                let path = position.locate(self.store.plan())?;
                let changes = describe_changes(&edit);
                let day = self
                    .store
                    .edit_day(&path, &edit.into())
                    .context("Failed to edit day")?;
                self.finish(&UpdateResult::with_changes(day, changes).to_string())
            }
        }
    }

    pub fn handle_task_command(mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let day = args.position.locate(self.store.plan())?;
                let task = self
                    .store
                    .add_task(&args.into_params(day))
                    .context("Failed to add task")?;
                self.finish(&CreateResult::new(task).to_string())
            }
            TaskCommands::Remove(position) => {
                let path = position.locate(self.store.plan())?;
                let task = self
                    .store
                    .remove_task(&path)
                    .context("Failed to remove task")?;
                self.finish(&DeleteResult::new(task).to_string())
            }
            TaskCommands::Toggle(position) => {
                let path = position.locate(self.store.plan())?;
                let completed = self
                    .store
                    .toggle_task_completion(&path)
                    .context("Failed to toggle task")?;
                let title = self.task_title(&path);
                self.finish(&completion_status("Task", &title, completed))
            }
            TaskCommands::Rename(args) => {
                let path = args.position.locate(self.store.plan())?;
                let old_title = self.task_title(&path);
                let task = self
                    .store
                    .edit_task_title(&path, &args.title)
                    .context("Failed to rename task")?;
                let changes = vec![format!("Renamed from '{old_title}'")];
                self.finish(&UpdateResult::with_changes(task, changes).to_string())
            }
        }
    }

    /// Warns that the saved plan was unreadable and a new one was started.
    fn render_load_error(&self) -> Result<()> {
        match self.store.load_error() {
            Some(error) => self
                .renderer
                .render(&OperationStatus::failure(error.to_string()).to_string()),
            None => Ok(()),
        }
    }

    /// Renders the outcome of a mutation, warning when it was not saved.
    fn finish(&self, output: &str) -> Result<()> {
        self.render_load_error()?;
        if let Some(error) = self.store.last_persistence_error() {
            warn!("Last change was not saved: {error}");
            let status = OperationStatus::failure(format!("Change not saved: {error}"));
            self.renderer.render(&status.to_string())?;
        }
        self.renderer.render(output)
    }

    fn title_of_year(&self, year_id: &str) -> String {
        self.store
            .plan()
            .year(year_id)
            .map(|y| y.title.clone())
            .unwrap_or_default()
    }

    fn task_title(&self, path: &TaskPath) -> String {
        self.store
            .plan()
            .year(path.year_id.as_str())
            .and_then(|y| y.month(path.month_id.as_str()))
            .and_then(|m| m.day(path.day_id.as_str()))
            .and_then(|d| d.task(path.task_id.as_str()))
            .map(|t| t.title.clone())
            .unwrap_or_default()
    }

    /// Title of the deepest node named by the ids.
    fn title_of(&self, year_id: &str, month_id: Option<&str>, day_id: Option<&str>) -> String {
        let plan = self.store.plan();
        let Some(year) = plan.year(year_id) else {
            return String::new();
        };
        let Some(month) = month_id.and_then(|id| year.month(id)) else {
            return year.title.clone();
        };
        match day_id.and_then(|id| month.day(id)) {
            Some(day) => day.title.clone(),
            None => month.title.clone(),
        }
    }
}

fn describe_changes(edit: &EditArgs) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(title) = &edit.title {
        changes.push(format!("Title set to '{}'", title.trim()));
    }
    if let Some(description) = &edit.description {
        if description.is_empty() {
            changes.push("Description cleared".to_string());
        } else {
            changes.push("Description updated".to_string());
        }
    }
    changes
}

fn completion_status(what: &str, title: &str, completed: bool) -> String {
    OperationStatus::toggled(what, title, completed, "completed", "reopened").to_string()
}

fn expansion_status(what: &str, title: &str, expanded: bool) -> String {
    OperationStatus::toggled(what, title, expanded, "expanded", "collapsed").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_changes() {
        let edit = EditArgs {
            title: Some("  Lead ".to_string()),
            description: Some(String::new()),
        };
        assert_eq!(
            describe_changes(&edit),
            vec!["Title set to 'Lead'".to_string(), "Description cleared".to_string()]
        );

        let nothing = EditArgs {
            title: None,
            description: None,
        };
        assert!(describe_changes(&nothing).is_empty());
    }
}
