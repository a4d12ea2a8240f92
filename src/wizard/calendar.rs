use chrono::{Datelike, NaiveDate};

use crate::catalog::text::Language;

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// One cell of the seven-column month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Placeholder before the first day of the month.
    Empty,
    /// A day of the month, 1-based.
    Day(u32),
}

/// Number of days in the given month, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| {
            let (next_year, next_month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            NaiveDate::from_ymd_opt(next_year, next_month, 1)
                .map(|next| (next - first).num_days() as u32)
        })
        .unwrap_or(0)
}

/// Grid column of the month's first day, with Sunday in column 0.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Cells of the month grid: leading placeholders, then every day in order.
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    let offset = first_weekday_offset(year, month);
    let days = days_in_month(year, month);
    let mut cells = Vec::with_capacity((offset + days) as usize);
    for _ in 0..offset {
        cells.push(CalendarCell::Empty);
    }
    for day in 1..=days {
        cells.push(CalendarCell::Day(day));
    }
    cells
}

/// Strictly before today; today itself is bookable.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Rendering flags for one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFlags {
    pub past: bool,
    pub today: bool,
    pub selected: bool,
}

pub fn day_flags(date: NaiveDate, today: NaiveDate, selected: Option<NaiveDate>) -> DayFlags {
    DayFlags {
        past: is_past(date, today),
        today: date == today,
        selected: selected == Some(date),
    }
}

/// Month the calendar screen is looking at, navigable without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Next month, rolling December into January.
    pub fn forward(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Previous month, rolling January into December.
    pub fn backward(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn grid(self) -> Vec<CalendarCell> {
        month_grid(self.year, self.month)
    }

    /// Date for a day number in this month, if the number is valid.
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header label such as "March 2025".
    pub fn label(self, language: Language) -> String {
        match language {
            Language::En => self
                .date(1)
                .map(|first| first.format("%B %Y").to_string())
                .unwrap_or_default(),
            Language::Ar => {
                let index = self.month.saturating_sub(1) as usize;
                let name = ARABIC_MONTHS.get(index).copied().unwrap_or_default();
                format!("{name} {}", self.year)
            }
        }
    }
}
