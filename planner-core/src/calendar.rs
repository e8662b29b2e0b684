use std::fmt;

use time::{Date, Duration, Month};

/// A calendar month, e.g. March 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn of(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn next(self) -> Self {
        match self.month {
            Month::December => Self::new(self.year + 1, Month::January),
            month => Self::new(self.year, month.next()),
        }
    }

    pub fn previous(self) -> Self {
        match self.month {
            Month::January => Self::new(self.year - 1, Month::December),
            month => Self::new(self.year, month.previous()),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn day_count(&self) -> u8 {
        self.month.length(self.year)
    }

    /// Every day of the month, first to last.
    pub fn days(&self) -> Vec<Date> {
        (1..=self.day_count())
            .filter_map(|day| Date::from_calendar_date(self.year, self.month, day).ok())
            .collect()
    }

    pub fn first_day(&self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Selected day and viewed month of the month grid.
///
/// The two move independently: paging through months never changes the
/// selection, and the viewed month only follows the selection when a day
/// outside it is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    selected_date: Date,
    viewed_month: YearMonth,
}

impl CalendarState {
    pub fn new(today: Date) -> Self {
        Self {
            selected_date: today,
            viewed_month: YearMonth::of(today),
        }
    }

    pub fn selected_date(&self) -> Date {
        self.selected_date
    }

    pub fn viewed_month(&self) -> YearMonth {
        self.viewed_month
    }

    pub fn select(&mut self, date: Date) {
        self.selected_date = date;
        if !self.viewed_month.contains(date) {
            self.viewed_month = YearMonth::of(date);
        }
    }

    /// Move the selection by `days`, staying put at the ends of the
    /// representable date range.
    pub fn move_selection(&mut self, days: i64) {
        if let Some(date) = self.selected_date.checked_add(Duration::days(days)) {
            self.select(date);
        }
    }

    pub fn select_today(&mut self, today: Date) {
        self.select(today);
    }

    pub fn next_month(&mut self) {
        self.viewed_month = self.viewed_month.next();
    }

    pub fn previous_month(&mut self) {
        self.viewed_month = self.viewed_month.previous();
    }

    pub fn month_days(&self) -> Vec<Date> {
        self.viewed_month.days()
    }

    /// Number of empty cells before the 1st in a Sunday-first week grid.
    pub fn leading_blank_days(&self) -> u8 {
        self.viewed_month
            .first_day()
            .map(|d| d.weekday().number_days_from_sunday())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn month_days_cover_whole_month() {
        let calendar = CalendarState::new(date!(2024 - 02 - 10));
        let days = calendar.month_days();

        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&date!(2024 - 02 - 01)));
        assert_eq!(days.last(), Some(&date!(2024 - 02 - 29)));
    }

    #[test]
    fn day_count_handles_leap_years() {
        assert_eq!(YearMonth::new(2024, Month::February).day_count(), 29);
        assert_eq!(YearMonth::new(2023, Month::February).day_count(), 28);
        assert_eq!(YearMonth::new(2024, Month::April).day_count(), 30);
        assert_eq!(YearMonth::new(2024, Month::December).day_count(), 31);
    }

    #[test]
    fn paging_months_keeps_selection() {
        let mut calendar = CalendarState::new(date!(2024 - 12 - 31));

        calendar.next_month();
        assert_eq!(calendar.viewed_month(), YearMonth::new(2025, Month::January));
        assert_eq!(calendar.selected_date(), date!(2024 - 12 - 31));

        calendar.previous_month();
        calendar.previous_month();
        assert_eq!(calendar.viewed_month(), YearMonth::new(2024, Month::November));
        assert_eq!(calendar.selected_date(), date!(2024 - 12 - 31));
    }

    #[test]
    fn selecting_inside_viewed_month_keeps_month() {
        let mut calendar = CalendarState::new(date!(2024 - 03 - 14));
        calendar.next_month();
        let viewed = calendar.viewed_month();

        calendar.select(date!(2024 - 04 - 02));
        assert_eq!(calendar.viewed_month(), viewed);
        assert_eq!(calendar.selected_date(), date!(2024 - 04 - 02));
    }

    #[test]
    fn selecting_outside_viewed_month_follows_selection() {
        let mut calendar = CalendarState::new(date!(2024 - 03 - 31));

        calendar.move_selection(1);
        assert_eq!(calendar.selected_date(), date!(2024 - 04 - 01));
        assert_eq!(calendar.viewed_month(), YearMonth::new(2024, Month::April));

        calendar.move_selection(-7);
        assert_eq!(calendar.viewed_month(), YearMonth::new(2024, Month::March));
    }

    #[test]
    fn select_today_returns_to_current_month() {
        let mut calendar = CalendarState::new(date!(2024 - 03 - 14));
        calendar.next_month();
        calendar.next_month();

        calendar.select_today(date!(2024 - 03 - 14));
        assert_eq!(calendar.viewed_month(), YearMonth::new(2024, Month::March));
    }

    #[test]
    fn leading_blanks_follow_sunday_first_grid() {
        // 1 September 2024 is a Sunday, 1 March 2024 a Friday.
        assert_eq!(CalendarState::new(date!(2024 - 09 - 15)).leading_blank_days(), 0);
        assert_eq!(CalendarState::new(date!(2024 - 03 - 15)).leading_blank_days(), 5);
    }

    #[test]
    fn year_month_display() {
        assert_eq!(YearMonth::new(2024, Month::March).to_string(), "March 2024");
    }
}
