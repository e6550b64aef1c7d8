//! Expanded/collapsed bookkeeping for year and month nodes.
//!
//! The state is keyed by the same ids as the plan tree but lives beside it:
//! nothing here looks at the plan except [`ExpansionState::retain_existing`].
//! A node without an entry is collapsed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CareerPlan, EntityId};

/// Expansion flags for years and for `(year, month)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpansionState {
    #[serde(default)]
    years: BTreeMap<EntityId, bool>,
    /// Composite key `(year_id, month_id)`, nested so a year purge is one
    /// removal.
    #[serde(default)]
    months: BTreeMap<EntityId, BTreeMap<EntityId, bool>>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the year's months are shown.
    pub fn is_year_expanded(&self, year_id: &str) -> bool {
        self.years.get(year_id).copied().unwrap_or(false)
    }

    /// Whether the month's days are shown.
    pub fn is_month_expanded(&self, year_id: &str, month_id: &str) -> bool {
        self.months
            .get(year_id)
            .and_then(|months| months.get(month_id))
            .copied()
            .unwrap_or(false)
    }

    /// Marks a year expanded, as done for freshly created years.
    pub fn expand_year(&mut self, year_id: &EntityId) {
        self.years.insert(year_id.clone(), true);
    }

    /// Marks a month expanded, as done for freshly created months.
    pub fn expand_month(&mut self, year_id: &EntityId, month_id: &EntityId) {
        self.months
            .entry(year_id.clone())
            .or_default()
            .insert(month_id.clone(), true);
    }

    /// Flips a year's flag and returns the new value.
    pub fn toggle_year(&mut self, year_id: &EntityId) -> bool {
        let flag = self.years.entry(year_id.clone()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Flips a month's flag and returns the new value.
    pub fn toggle_month(&mut self, year_id: &EntityId, month_id: &EntityId) -> bool {
        let flag = self
            .months
            .entry(year_id.clone())
            .or_default()
            .entry(month_id.clone())
            .or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Drops the year's entry and every month entry under it.
    pub fn purge_year(&mut self, year_id: &str) {
        self.years.remove(year_id);
        self.months.remove(year_id);
    }

    /// Drops a single month entry.
    pub fn purge_month(&mut self, year_id: &str, month_id: &str) {
        if let Some(months) = self.months.get_mut(year_id) {
            months.remove(month_id);
            if months.is_empty() {
                self.months.remove(year_id);
            }
        }
    }

    /// Whether any entry, expanded or not, exists for the year.
    pub fn tracks_year(&self, year_id: &str) -> bool {
        self.years.contains_key(year_id)
    }

    /// Whether any entry, expanded or not, exists for the month.
    pub fn tracks_month(&self, year_id: &str, month_id: &str) -> bool {
        self.months
            .get(year_id)
            .is_some_and(|months| months.contains_key(month_id))
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        self.years.len() + self.months.values().map(BTreeMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes entries whose node no longer exists in `plan`.
    ///
    /// Used when state saved by an earlier session meets a plan that was
    /// changed in the meantime.
    pub fn retain_existing(&mut self, plan: &CareerPlan) {
        self.years.retain(|year_id, _| plan.year(year_id.as_str()).is_some());
        self.months.retain(|year_id, months| match plan.year(year_id.as_str()) {
            Some(year) => {
                months.retain(|month_id, _| year.month(month_id.as_str()).is_some());
                !months.is_empty()
            }
            None => false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Year};

    fn id(value: &str) -> EntityId {
        EntityId::from(value)
    }

    #[test]
    fn test_absent_entries_are_collapsed() {
        let state = ExpansionState::new();

        assert!(!state.is_year_expanded("year-1"));
        assert!(!state.is_month_expanded("year-1", "month-1"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_flips_and_reports() {
        let mut state = ExpansionState::new();

        assert!(state.toggle_year(&id("year-1")));
        assert!(state.is_year_expanded("year-1"));
        assert!(!state.toggle_year(&id("year-1")));
        assert!(!state.is_year_expanded("year-1"));

        assert!(state.toggle_month(&id("year-1"), &id("month-1")));
        assert!(state.is_month_expanded("year-1", "month-1"));
        assert!(!state.is_month_expanded("year-2", "month-1"));
    }

    #[test]
    fn test_purge_year_removes_nested_months() {
        let mut state = ExpansionState::new();
        state.expand_year(&id("year-1"));
        state.expand_month(&id("year-1"), &id("month-1"));
        state.expand_month(&id("year-1"), &id("month-2"));
        state.expand_year(&id("year-2"));

        state.purge_year("year-1");

        assert!(!state.tracks_year("year-1"));
        assert!(!state.tracks_month("year-1", "month-1"));
        assert!(!state.tracks_month("year-1", "month-2"));
        assert!(state.tracks_year("year-2"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_purge_month_keeps_siblings() {
        let mut state = ExpansionState::new();
        state.expand_month(&id("year-1"), &id("month-1"));
        state.expand_month(&id("year-1"), &id("month-2"));

        state.purge_month("year-1", "month-1");
        assert!(!state.tracks_month("year-1", "month-1"));
        assert!(state.tracks_month("year-1", "month-2"));

        state.purge_month("year-1", "month-2");
        assert!(state.is_empty());
    }

    #[test]
    fn test_retain_existing_drops_stale_ids() {
        let mut plan = CareerPlan::default();
        let mut year = Year::new(1);
        let month = Month::new(1);
        let (year_id, month_id) = (year.id.clone(), month.id.clone());
        year.months.push(month);
        plan.years.push(year);

        let mut state = ExpansionState::new();
        state.expand_year(&year_id);
        state.expand_month(&year_id, &month_id);
        state.expand_month(&year_id, &id("month-gone"));
        state.expand_year(&id("year-gone"));
        state.expand_month(&id("year-gone"), &id("month-1"));

        state.retain_existing(&plan);

        assert_eq!(state.len(), 2);
        assert!(state.is_year_expanded(year_id.as_str()));
        assert!(state.is_month_expanded(year_id.as_str(), month_id.as_str()));
    }

    #[test]
    fn test_state_serializes_as_nested_objects() {
        let mut state = ExpansionState::new();
        state.expand_month(&id("year-1"), &id("month-1"));

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["months"]["year-1"]["month-1"], true);

        let back: ExpansionState = serde_json::from_value(value).unwrap();
        assert_eq!(back, state);
    }
}
