use core::cmp::Ordering;
use core::fmt;
use num::Integer;
use serde::{Deserialize, Serialize};

/// First minute of the day.
pub const START_OF_DAY: i32 = 0;

/// Exclusive end of the day, in minutes since midnight.
pub const END_OF_DAY: i32 = 24 * 60;

/// The range covering the entire day, `[00:00, 24:00)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: END_OF_DAY,
};

/// Compares two ranges by their start minute only.
/// Meant to be used with a stable sort, so ranges sharing a start keep their
/// relative order.
pub const ORDER_BY_START: fn(&TimeRange, &TimeRange) -> Ordering = order_by_start;

fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start)
}

/// Converts a wall clock time into minutes since midnight.
///
/// # Examples
/// ```
/// use meeting_query::time::time_in_minutes;
///
/// assert_eq!(time_in_minutes(0, 0), 0);
/// assert_eq!(time_in_minutes(8, 30), 510);
/// assert_eq!(time_in_minutes(24, 0), 1440);
/// ```
pub fn time_in_minutes(hours: i32, minutes: i32) -> i32 {
    hours * 60 + minutes
}

/// Half-open `[start, end)` range of minutes within a single day.
///
/// Equality and ordering are by `(start, end)`.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    /// Construct the range `[start, start + duration)`
    ///
    /// # Examples
    /// ```
    /// use meeting_query::time::TimeRange;
    ///
    /// let test = TimeRange::from_start_duration(510, 30);
    ///
    /// assert_eq!(test.start(), 510);
    /// assert_eq!(test.end(), 540);
    /// assert_eq!(test.duration(), 30);
    /// ```
    pub fn from_start_duration(start: i32, duration: i32) -> TimeRange {
        TimeRange {
            start,
            end: start + duration,
        }
    }

    /// Construct a range from its bounds.
    ///
    /// With `inclusive` unset the range is `[start, end)`. With `inclusive`
    /// set, `end` names the last minute that belongs to the range, so the
    /// exclusive end becomes `end + 1`, never reaching past `END_OF_DAY`.
    ///
    /// # Examples
    /// ```
    /// use meeting_query::time::{TimeRange, END_OF_DAY, WHOLE_DAY};
    ///
    /// let morning = TimeRange::from_start_end(0, 510, false);
    /// assert_eq!(morning.end(), 510);
    ///
    /// assert_eq!(TimeRange::from_start_end(0, END_OF_DAY - 1, true), WHOLE_DAY);
    /// assert_eq!(TimeRange::from_start_end(0, END_OF_DAY, true), WHOLE_DAY);
    /// ```
    pub fn from_start_end(start: i32, end: i32, inclusive: bool) -> TimeRange {
        let end = if inclusive && end < END_OF_DAY {
            end + 1
        } else {
            end
        };

        TimeRange { start, end }
    }

    /// Returns the first minute of the range
    pub fn start(self) -> i32 {
        self.start
    }

    /// Returns the exclusive end of the range
    pub fn end(self) -> i32 {
        self.end
    }

    pub fn duration(self) -> i32 {
        self.end - self.start
    }

    /// Two ranges overlap if they share at least one minute.
    ///
    /// # Examples
    /// ```
    /// use meeting_query::time::TimeRange;
    ///
    /// let a = TimeRange::from_start_end(0, 60, false);
    /// let b = TimeRange::from_start_end(30, 90, false);
    /// let c = TimeRange::from_start_end(60, 90, false);
    ///
    /// assert!(a.overlaps(b));
    /// assert!(b.overlaps(a));
    /// assert!(!a.overlaps(c));
    /// ```
    pub fn overlaps(self, other: TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `true` if every minute of `other` is also in `self`.
    /// An empty range is contained wherever its start lies.
    pub fn contains(self, other: TimeRange) -> bool {
        if other.start == other.end {
            return self.contains_point(other.start) || other.start == self.end;
        }

        self.start <= other.start && other.end <= self.end
    }

    pub fn contains_point(self, minute: i32) -> bool {
        self.start <= minute && minute < self.end
    }
}

impl fmt::Display for TimeRange {
    /// Formats as `HH:MM-HH:MM`
    ///
    /// # Examples
    /// ```
    /// use meeting_query::time::{TimeRange, WHOLE_DAY};
    ///
    /// assert_eq!(WHOLE_DAY.to_string(), "00:00-24:00");
    /// assert_eq!(TimeRange::from_start_duration(510, 30).to_string(), "08:30-09:00");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start_hours, start_minutes) = self.start.div_rem(&60);
        let (end_hours, end_minutes) = self.end.div_rem(&60);

        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            start_hours, start_minutes, end_hours, end_minutes
        )
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for TimeRange {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let start = u.int_in_range(START_OF_DAY..=END_OF_DAY)?;
        let end = u.int_in_range(start..=END_OF_DAY)?;

        Ok(TimeRange { start, end })
    }
}
