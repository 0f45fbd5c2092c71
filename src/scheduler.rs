//! Daily practice schedule. Records what the user wants, never fires alarms.
//! Rebuilt from catalog defaults on every launch.

use chrono::NaiveTime;

use crate::catalog::PracticeKind;
use crate::error::ScheduleError;

const TIME_FMT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeEntry {
    pub kind: PracticeKind,
    pub enabled: bool,
    pub time: NaiveTime,
    pub completed: bool,
}

impl PracticeEntry {
    fn new(kind: PracticeKind) -> Self {
        Self {
            kind,
            enabled: true,
            time: kind.default_time(),
            completed: false,
        }
    }

    pub fn time_label(&self) -> String {
        self.time.format(TIME_FMT).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Schedule {
    entries: Vec<PracticeEntry>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            entries: PracticeKind::ALL.into_iter().map(PracticeEntry::new).collect(),
        }
    }
}

impl Schedule {
    pub fn entries(&self) -> &[PracticeEntry] {
        &self.entries
    }

    pub fn entry(&self, kind: PracticeKind) -> &PracticeEntry {
        &self.entries[kind as usize]
    }

    fn entry_mut(&mut self, kind: PracticeKind) -> &mut PracticeEntry {
        &mut self.entries[kind as usize]
    }

    /// Flips the enabled flag and returns the new value.
    pub fn toggle_enabled(&mut self, kind: PracticeKind) -> bool {
        let entry = self.entry_mut(kind);
        entry.enabled = !entry.enabled;
        entry.enabled
    }

    pub fn set_time(&mut self, kind: PracticeKind, time: NaiveTime) -> Result<(), ScheduleError> {
        let entry = self.entry_mut(kind);
        if !entry.enabled {
            return Err(ScheduleError::Disabled(kind));
        }
        entry.time = time;
        Ok(())
    }

    /// Parses `HH:MM` and applies it through [`Schedule::set_time`].
    pub fn set_time_str(&mut self, kind: PracticeKind, input: &str) -> Result<NaiveTime, ScheduleError> {
        let time = parse_time(input)?;
        self.set_time(kind, time)?;
        Ok(time)
    }

    /// Toggles today's completion mark and returns the new value.
    pub fn toggle_completed(&mut self, kind: PracticeKind) -> bool {
        let entry = self.entry_mut(kind);
        entry.completed = !entry.completed;
        entry.completed
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }

    /// The earliest enabled, still pending practice at or after `now`.
    pub fn next_up(&self, now: NaiveTime) -> Option<&PracticeEntry> {
        self.entries
            .iter()
            .filter(|e| e.enabled && !e.completed && e.time >= now)
            .min_by_key(|e| e.time)
    }
}

pub fn parse_time(input: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FMT).map_err(|_| ScheduleError::InvalidTime(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn starts_from_catalog_defaults() {
        let schedule = Schedule::default();
        assert_eq!(schedule.entries().len(), 4);
        assert!(schedule.entries().iter().all(|e| e.enabled && !e.completed));
        assert_eq!(schedule.entry(PracticeKind::Evening).time_label(), "19:00");
    }

    #[test]
    fn toggle_enabled_flips() {
        let mut schedule = Schedule::default();
        assert!(!schedule.toggle_enabled(PracticeKind::Prayer));
        assert!(schedule.toggle_enabled(PracticeKind::Prayer));
    }

    #[test]
    fn set_time_only_applies_to_enabled_entries() {
        let mut schedule = Schedule::default();
        schedule.set_time(PracticeKind::Morning, hm(6, 15)).unwrap();
        assert_eq!(schedule.entry(PracticeKind::Morning).time, hm(6, 15));

        schedule.toggle_enabled(PracticeKind::Morning);
        assert_eq!(
            schedule.set_time(PracticeKind::Morning, hm(7, 0)),
            Err(ScheduleError::Disabled(PracticeKind::Morning))
        );
        assert_eq!(schedule.entry(PracticeKind::Morning).time, hm(6, 15));
    }

    #[test]
    fn time_strings_are_validated() {
        let mut schedule = Schedule::default();
        assert_eq!(schedule.set_time_str(PracticeKind::Night, " 23:45 "), Ok(hm(23, 45)));
        assert_eq!(
            schedule.set_time_str(PracticeKind::Night, "25:00"),
            Err(ScheduleError::InvalidTime("25:00".into()))
        );
        assert!(schedule.set_time_str(PracticeKind::Night, "late").is_err());
        assert_eq!(schedule.entry(PracticeKind::Night).time, hm(23, 45));
    }

    #[test]
    fn next_up_skips_disabled_and_completed() {
        let mut schedule = Schedule::default();
        assert_eq!(schedule.next_up(hm(12, 0)).map(|e| e.kind), Some(PracticeKind::Evening));

        schedule.toggle_completed(PracticeKind::Evening);
        schedule.toggle_enabled(PracticeKind::Prayer);
        assert_eq!(schedule.next_up(hm(12, 0)).map(|e| e.kind), Some(PracticeKind::Night));
        assert_eq!(schedule.next_up(hm(22, 30)), None);
        assert_eq!(schedule.completed_count(), 1);
    }
}
