//! Date Formatting
//!
//! Long-form labels for entry dates. Formatting works on the calendar date
//! itself, so no timezone can shift the displayed day.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::models::DATE_FORMAT;

/// Display language for dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `2024년 1월 1일`
    #[default]
    Korean,
    /// `January 1, 2024`
    English,
}

impl DateLocale {
    /// Year, month and day (list rows)
    pub fn long_date(&self, date: NaiveDate) -> String {
        match self {
            DateLocale::Korean => format!("{}년 {}월 {}일", date.year(), date.month(), date.day()),
            DateLocale::English => format!(
                "{} {}, {}",
                english_month(date.month()),
                date.day(),
                date.year()
            ),
        }
    }

    /// Long date including the weekday (detail overlay)
    pub fn long_date_with_weekday(&self, date: NaiveDate) -> String {
        match self {
            DateLocale::Korean => format!("{} {}", self.long_date(date), korean_weekday(date.weekday())),
            DateLocale::English => format!("{}, {}", english_weekday(date.weekday()), self.long_date(date)),
        }
    }
}

/// Today's local date as `YYYY-MM-DD`, the default for the date input
pub fn today_iso() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

fn korean_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "월요일",
        Weekday::Tue => "화요일",
        Weekday::Wed => "수요일",
        Weekday::Thu => "목요일",
        Weekday::Fri => "금요일",
        Weekday::Sat => "토요일",
        Weekday::Sun => "일요일",
    }
}

fn english_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn english_month(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ];
    MONTHS[(month as usize).saturating_sub(1) % 12]
}
