use time::{Date, OffsetDateTime, UtcOffset};

/// Local UTC offset, falling back to UTC when it can't be determined.
///
/// Must be called before any other thread is spawned; the offset lookup is
/// refused once the process is multi-threaded.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Today's date on the local wall clock.
pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// Where the app reads "today" from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Live wall clock at a fixed offset; rolls over at local midnight.
    Local(UtcOffset),
    Fixed(Date),
}

impl Clock {
    pub fn today(&self) -> Date {
        match self {
            Clock::Local(offset) => today(*offset),
            Clock::Fixed(date) => *date,
        }
    }
}

impl From<Date> for Clock {
    fn from(date: Date) -> Self {
        Clock::Fixed(date)
    }
}
