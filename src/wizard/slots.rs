use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::text::Language;

const MORNING: &[&str] = &["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"];
const AFTERNOON: &[&str] = &[
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "16:00",
];
const EVENING: &[&str] = &[
    "16:30", "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00",
];

static SLOT_TABLE: Lazy<Vec<TimeSlot>> = Lazy::new(|| {
    let buckets = [
        (DayPeriod::Morning, MORNING),
        (DayPeriod::Afternoon, AFTERNOON),
        (DayPeriod::Evening, EVENING),
    ];
    let mut table = Vec::new();
    for (period, times) in buckets {
        for &time in times {
            table.push(TimeSlot { time, period });
        }
    }
    table
});

/// Daypart buckets the slot picker filters by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 3] = [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening];

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (DayPeriod::Morning, Language::En) => "Morning",
            (DayPeriod::Morning, Language::Ar) => "صباحاً",
            (DayPeriod::Afternoon, Language::En) => "Afternoon",
            (DayPeriod::Afternoon, Language::Ar) => "ظهراً",
            (DayPeriod::Evening, Language::En) => "Evening",
            (DayPeriod::Evening, Language::Ar) => "مساءً",
        }
    }
}

/// A half-hour appointment start time from the fixed clinic timetable.
///
/// Values only come out of [`slot_table`] and [`find_slot`], so holding a
/// `TimeSlot` proves the time is on the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    time: &'static str,
    period: DayPeriod,
}

impl TimeSlot {
    /// Wall-clock label, for example "09:30".
    pub fn as_str(self) -> &'static str {
        self.time
    }

    pub fn period(self) -> DayPeriod {
        self.period
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.time)
    }
}

/// Every bookable start time, in display order.
pub fn slot_table() -> &'static [TimeSlot] {
    &SLOT_TABLE
}

/// Slots belonging to one daypart, in display order.
pub fn slots_in(period: DayPeriod) -> Vec<TimeSlot> {
    slot_table()
        .iter()
        .copied()
        .filter(|slot| slot.period == period)
        .collect()
}

/// Looks a wall-clock label up in the timetable.
pub fn find_slot(time: &str) -> Option<TimeSlot> {
    slot_table().iter().copied().find(|slot| slot.time == time)
}

/// Start times that cannot be booked, globally or on specific days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    /// Times blocked on every day.
    #[serde(default)]
    pub blocked: BTreeSet<String>,
    /// Additional times blocked on a single date.
    #[serde(default)]
    pub blocked_by_date: BTreeMap<NaiveDate, BTreeSet<String>>,
}

impl SlotAvailability {
    /// Static block list used until per-branch availability is served.
    pub fn fixture() -> Self {
        let mut availability = Self::default();
        for time in ["10:30", "13:00", "18:30"] {
            availability.block(time);
        }
        availability
    }

    pub fn block(&mut self, time: &str) {
        self.blocked.insert(time.to_string());
    }

    pub fn block_on(&mut self, date: NaiveDate, time: &str) {
        self.blocked_by_date
            .entry(date)
            .or_default()
            .insert(time.to_string());
    }

    /// True when the slot cannot be booked on the given date.
    pub fn is_disabled(&self, date: NaiveDate, slot: TimeSlot) -> bool {
        if self.blocked.contains(slot.as_str()) {
            return true;
        }
        self.blocked_by_date
            .get(&date)
            .map(|times| times.contains(slot.as_str()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn timetable_is_unique_and_ascending() {
        let table = slot_table();
        assert_eq!(table.len(), 23);
        for pair in table.windows(2) {
            assert!(
                pair[0].as_str() < pair[1].as_str(),
                "{} should precede {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn dayparts_partition_the_timetable() {
        let counted: usize = DayPeriod::ALL
            .iter()
            .map(|period| slots_in(*period).len())
            .sum();
        assert_eq!(counted, slot_table().len());
        assert!(slots_in(DayPeriod::Morning)
            .iter()
            .all(|slot| slot.period() == DayPeriod::Morning));
    }

    #[test]
    fn find_slot_only_accepts_timetable_entries() {
        assert!(find_slot("09:30").is_some());
        assert!(find_slot("09:15").is_none());
        assert!(find_slot("21:00").is_none());
    }

    #[test]
    fn fixture_blocks_are_disabled_on_every_date() {
        let availability = SlotAvailability::fixture();
        let slot = find_slot("10:30").expect("timetable slot");
        assert!(availability.is_disabled(date(2025, 3, 20), slot));
        assert!(availability.is_disabled(date(2026, 1, 1), slot));
    }

    #[test]
    fn date_blocks_only_apply_to_their_date() {
        let mut availability = SlotAvailability::default();
        availability.block_on(date(2025, 3, 20), "09:00");
        let slot = find_slot("09:00").expect("timetable slot");
        assert!(availability.is_disabled(date(2025, 3, 20), slot));
        assert!(!availability.is_disabled(date(2025, 3, 21), slot));
    }
}
