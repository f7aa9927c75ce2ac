//! Periodic background job table.
//!
//! Declares *when* recurring jobs run and with which arguments. Execution,
//! retry, and concurrency semantics belong to the external task runner;
//! this table is handed to it verbatim at startup.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Serialize, Serializer};

use super::constants::{HARVEST_PERIOD, INDEXER_PERIOD, TASK_HARVEST, TASK_PROCESS_BULK_QUEUE};

/// One periodic job: which task to run, how often, and with which
/// positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Dotted task reference resolved by the task runner
    pub task: String,
    /// Recurrence period
    #[serde(rename = "every_secs", serialize_with = "duration_as_secs")]
    pub every: Duration,
    /// Positional arguments passed to the task
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl ScheduleEntry {
    pub fn new(task: impl Into<String>, every: Duration) -> Self {
        Self {
            task: task.into(),
            every,
            args: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

fn duration_as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_secs())
}

/// Named table of periodic jobs, iterated in stable name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BeatSchedule {
    entries: BTreeMap<String, ScheduleEntry>,
}

impl BeatSchedule {
    /// An empty schedule.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace an entry, returning the previous one if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        entry: ScheduleEntry,
    ) -> Option<ScheduleEntry> {
        self.entries.insert(name.into(), entry)
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&ScheduleEntry> {
        self.entries.get(name)
    }

    /// Mutable lookup, used when applying overrides.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ScheduleEntry> {
        self.entries.get_mut(name)
    }

    /// Remove an entry by name.
    pub fn remove(&mut self, name: &str) -> Option<ScheduleEntry> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScheduleEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for BeatSchedule {
    /// The shipped schedule: flush the bulk index queue every five minutes
    /// and harvest each configured source region once a day.
    fn default() -> Self {
        let mut schedule = Self::empty();
        schedule.insert(
            "indexer",
            ScheduleEntry::new(TASK_PROCESS_BULK_QUEUE, INDEXER_PERIOD),
        );
        schedule.insert(
            "Harvester-VS",
            ScheduleEntry::new(TASK_HARVEST, HARVEST_PERIOD).with_arg("VS"),
        );
        schedule.insert(
            "Harvester-NJ",
            ScheduleEntry::new(TASK_HARVEST, HARVEST_PERIOD).with_arg("NJ"),
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_entries() {
        let schedule = BeatSchedule::default();
        assert_eq!(schedule.len(), 3);

        let indexer = schedule.get("indexer").unwrap();
        assert_eq!(indexer.task, TASK_PROCESS_BULK_QUEUE);
        assert_eq!(indexer.every, Duration::from_secs(300));
        assert!(indexer.args.is_empty());

        for (name, region) in [("Harvester-VS", "VS"), ("Harvester-NJ", "NJ")] {
            let harvester = schedule.get(name).unwrap();
            assert_eq!(harvester.task, TASK_HARVEST);
            assert_eq!(harvester.every, Duration::from_secs(86_400));
            assert_eq!(harvester.args, vec![region.to_string()]);
        }
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let schedule = BeatSchedule::default();
        let names: Vec<&str> = schedule.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Harvester-NJ", "Harvester-VS", "indexer"]);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut schedule = BeatSchedule::default();
        let previous = schedule.insert(
            "indexer",
            ScheduleEntry::new(TASK_PROCESS_BULK_QUEUE, Duration::from_secs(60)),
        );
        assert!(previous.is_some());
        assert_eq!(
            schedule.get("indexer").unwrap().every,
            Duration::from_secs(60)
        );
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_serializes_period_as_seconds() {
        let schedule = BeatSchedule::default();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["indexer"]["every_secs"], 300);
        assert_eq!(json["Harvester-VS"]["args"][0], "VS");
        // No args key when the task takes none
        assert!(json["indexer"].get("args").is_none());
    }
}
