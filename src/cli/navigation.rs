//! Keyboard-driven date picking for interactive runs.

use std::io::{self, Write};

use chrono::{Datelike, Duration, NaiveDate};
use crossterm::cursor::MoveUp;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::ExecutableCommand;

use super::screens;
use crate::catalog::text::Language;
use crate::errors::CliError;
use crate::wizard::calendar::{days_in_month, is_past};
use crate::wizard::MonthCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Char(char),
    Unknown,
}

pub fn read_nav_key() -> NavKey {
    match event::read() {
        Ok(Event::Key(key)) => match key.code {
            KeyCode::Up => NavKey::Up,
            KeyCode::Down => NavKey::Down,
            KeyCode::Left => NavKey::Left,
            KeyCode::Right => NavKey::Right,
            KeyCode::Enter => NavKey::Enter,
            KeyCode::Esc => NavKey::Esc,
            KeyCode::Char(c) => NavKey::Char(c),
            _ => NavKey::Unknown,
        },
        _ => NavKey::Unknown,
    }
}

/// Month picker on the month grid: arrows move the focused day, n/p
/// jump a month, Enter takes the focused day, Esc backs out. Past days
/// refuse Enter.
pub fn pick_date_interactive(
    today: NaiveDate,
    initial: Option<NaiveDate>,
    language: Language,
) -> Result<Option<NaiveDate>, CliError> {
    let mut focus = initial.unwrap_or(today);
    if is_past(focus, today) {
        focus = today;
    }
    let mut drawn_lines: u16 = 0;
    let mut notice: Option<&'static str> = None;
    let mut stdout = io::stdout();
    loop {
        let frame = build_frame(focus, today, language, notice);
        if drawn_lines > 0 {
            stdout.execute(MoveUp(drawn_lines))?;
            stdout.execute(Clear(ClearType::FromCursorDown))?;
        }
        println!("{frame}");
        stdout.flush()?;
        drawn_lines = frame.lines().count() as u16;
        notice = None;

        // Raw mode only around the key read, so printing stays cooked.
        terminal::enable_raw_mode()?;
        let key = read_nav_key();
        terminal::disable_raw_mode()?;

        match key {
            NavKey::Left => focus = shift_days(focus, -1),
            NavKey::Right => focus = shift_days(focus, 1),
            NavKey::Up => focus = shift_days(focus, -7),
            NavKey::Down => focus = shift_days(focus, 7),
            NavKey::Char('p' | 'P') => focus = shift_month(focus, false),
            NavKey::Char('n' | 'N') => focus = shift_month(focus, true),
            NavKey::Enter => {
                if is_past(focus, today) {
                    notice = Some(past_notice(language));
                } else {
                    return Ok(Some(focus));
                }
            }
            NavKey::Esc => return Ok(None),
            NavKey::Char(_) | NavKey::Unknown => {}
        }
    }
}

fn build_frame(
    focus: NaiveDate,
    today: NaiveDate,
    language: Language,
    notice: Option<&str>,
) -> String {
    let cursor = MonthCursor::from_date(focus);
    let mut frame = screens::render_month(cursor, today, Some(focus), language);
    frame.push('\n');
    frame.push_str(help_line(language));
    if let Some(notice) = notice {
        frame.push('\n');
        frame.push_str(notice);
    }
    frame
}

fn help_line(language: Language) -> &'static str {
    match language {
        Language::En => "arrows move, n/p month, Enter pick, Esc back",
        Language::Ar => "الأسهم للتنقل، n/p للشهر، Enter للاختيار، Esc للرجوع",
    }
}

fn past_notice(language: Language) -> &'static str {
    match language {
        Language::En => "That day has already passed",
        Language::Ar => "هذا اليوم قد مضى",
    }
}

fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

// Keeps the day number when jumping months, clamped to month length.
fn shift_month(date: NaiveDate, forward: bool) -> NaiveDate {
    let cursor = MonthCursor::from_date(date);
    let cursor = if forward {
        cursor.forward()
    } else {
        cursor.backward()
    };
    let day = date.day().min(days_in_month(cursor.year, cursor.month));
    cursor.date(day).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn day_shift_crosses_month_boundaries() {
        assert_eq!(shift_days(date(2025, 3, 31), 1), date(2025, 4, 1));
        assert_eq!(shift_days(date(2025, 3, 1), -1), date(2025, 2, 28));
        assert_eq!(shift_days(date(2025, 3, 14), 7), date(2025, 3, 21));
    }

    #[test]
    fn month_shift_clamps_to_shorter_months() {
        assert_eq!(shift_month(date(2025, 1, 31), true), date(2025, 2, 28));
        assert_eq!(shift_month(date(2025, 3, 31), false), date(2025, 2, 28));
        assert_eq!(shift_month(date(2025, 12, 15), true), date(2026, 1, 15));
    }
}
