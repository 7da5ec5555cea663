use crate::event::Event;
use crate::meeting::MeetingRequest;
use crate::time::{TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeSet;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

pub trait Available {
    fn available_times(self, attendees: &BTreeSet<String>, duration: i32) -> Vec<TimeRange>;
}

impl<'a, T> Available for T
where
    T: Iterator<Item = &'a Event>,
{
    /// Self is the day's events.
    /// Sweeps the events in order of their start, keeping a cursor on the
    /// first minute not taken by any event that involves `attendees`. Every
    /// gap in front of the cursor that fits `duration` is a free slot.
    ///
    /// # Examples
    /// ```
    /// use meeting_query::{event::Event, query::Available, time::TimeRange};
    /// use std::collections::BTreeSet;
    ///
    /// let events = vec![Event::new("1", TimeRange::from_start_duration(60, 60), vec!["A"])];
    /// let attendees: BTreeSet<String> = vec!["A".to_string()].into_iter().collect();
    ///
    /// assert_eq!(
    ///     events.iter().available_times(&attendees, 30),
    ///     vec![
    ///         TimeRange::from_start_end(0, 60, false),
    ///         TimeRange::from_start_end(120, 1440, false),
    ///     ]
    /// );
    /// ```
    fn available_times(self, attendees: &BTreeSet<String>, duration: i32) -> Vec<TimeRange> {
        if duration > WHOLE_DAY.duration() {
            return vec![];
        }

        let mut events = self.peekable();
        if events.peek().is_none() {
            return vec![WHOLE_DAY];
        }

        let mut cursor = START_OF_DAY;
        let mut available = vec![];

        for event in events.sorted_by(|a, b| Event::ORDER_BY_START(a, b)) {
            if !event.is_attended_by(attendees) {
                continue;
            }

            let when = event.when();
            trace!("event {} blocks {} with cursor at {}", event.label(), when, cursor);

            if cursor.saturating_add(duration) <= when.start() {
                available.push(TimeRange::from_start_end(cursor, when.start(), false));
            }

            // A nested event must not pull the cursor back.
            cursor = cursor.max(when.end());
        }

        if cursor.saturating_add(duration) <= END_OF_DAY {
            available.push(TimeRange::from_start_end(cursor, END_OF_DAY, true));
        }

        available
    }
}

/// Finds every window of the day where the requested meeting fits.
///
/// Windows that work for mandatory and optional attendees together are
/// preferred. If there are none and the request has mandatory attendees,
/// the windows that work for the mandatory attendees alone are returned.
///
/// # Examples
/// ```
/// use meeting_query::{
///     event::Event,
///     meeting::MeetingRequest,
///     query::query,
///     time::{time_in_minutes, TimeRange, END_OF_DAY, START_OF_DAY},
/// };
///
/// let events = vec![
///     Event::new("1", TimeRange::from_start_duration(time_in_minutes(8, 30), 30), vec!["A"]),
///     Event::new("2", TimeRange::from_start_duration(START_OF_DAY, END_OF_DAY), vec!["C"]),
/// ];
///
/// let mut request = MeetingRequest::new(vec!["A"], 30);
/// request.add_optional_attendee("C");
///
/// // "C" is busy all day, so only "A" is honored
/// assert_eq!(
///     query(&events, &request),
///     vec![
///         TimeRange::from_start_end(START_OF_DAY, time_in_minutes(8, 30), false),
///         TimeRange::from_start_end(time_in_minutes(9, 0), END_OF_DAY, true),
///     ]
/// );
/// ```
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let duration = request.duration();

    if duration > WHOLE_DAY.duration() {
        debug!("requested {} minutes, longer than a day", duration);
        return vec![];
    }

    if events.is_empty() {
        return vec![WHOLE_DAY];
    }

    let available = events
        .iter()
        .available_times(&request.all_attendees(), duration);

    if available.is_empty() && !request.attendees().is_empty() {
        debug!(
            "no slot fits all {} attendees, retrying with the {} mandatory ones",
            request.all_attendees().len(),
            request.attendees().len()
        );
        return events.iter().available_times(request.attendees(), duration);
    }

    debug!("found {} slots of {} minutes", available.len(), duration);
    available
}

/// Runs every request against the same day of events.
/// Results are in the same order as `requests`.
pub fn query_all(events: &[Event], requests: &[MeetingRequest]) -> Vec<Vec<TimeRange>> {
    #[cfg(feature = "rayon")]
    {
        requests
            .par_iter()
            .map(|request| query(events, request))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        requests
            .iter()
            .map(|request| query(events, request))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::time_in_minutes;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn oversized_duration_is_rejected_by_the_sweep_itself() {
        let events: Vec<Event> = vec![];

        assert_eq!(events.iter().available_times(&set(&["A"]), END_OF_DAY + 1), Vec::<TimeRange>::new());
        assert_eq!(events.iter().available_times(&set(&["A"]), END_OF_DAY), vec![WHOLE_DAY]);
    }

    #[test]
    fn unrelated_events_leave_the_day_open() {
        let events = vec![Event::new(
            "1",
            TimeRange::from_start_duration(time_in_minutes(9, 0), 30),
            vec!["B"],
        )];

        assert_eq!(events.iter().available_times(&set(&["A"]), 30), vec![WHOLE_DAY]);
        assert_eq!(events.iter().available_times(&set(&[]), 30), vec![WHOLE_DAY]);
    }

    #[test]
    fn cursor_never_regresses_for_nested_events() {
        // sorted: 8:30-10:00, 9:00-9:30
        let events = vec![
            Event::new("inner", TimeRange::from_start_duration(time_in_minutes(9, 0), 30), vec!["B"]),
            Event::new("outer", TimeRange::from_start_duration(time_in_minutes(8, 30), 90), vec!["A"]),
        ];

        assert_eq!(
            events.iter().available_times(&set(&["A", "B"]), 30),
            vec![
                TimeRange::from_start_end(START_OF_DAY, time_in_minutes(8, 30), false),
                TimeRange::from_start_end(time_in_minutes(10, 0), END_OF_DAY, true),
            ]
        );
    }

    #[test]
    fn zero_duration_fits_zero_length_gaps() {
        let events = vec![
            Event::new("1", TimeRange::from_start_end(START_OF_DAY, 60, false), vec!["A"]),
            Event::new("2", TimeRange::from_start_end(60, END_OF_DAY, false), vec!["A"]),
        ];

        assert_eq!(
            events.iter().available_times(&set(&["A"]), 0),
            vec![
                TimeRange::from_start_end(START_OF_DAY, START_OF_DAY, false),
                TimeRange::from_start_end(60, 60, false),
                TimeRange::from_start_end(END_OF_DAY, END_OF_DAY, true),
            ]
        );
    }

    #[test]
    fn slot_ending_at_midnight_is_kept() {
        let events = vec![Event::new(
            "1",
            TimeRange::from_start_end(START_OF_DAY, END_OF_DAY - 30, false),
            vec!["A"],
        )];

        assert_eq!(
            events.iter().available_times(&set(&["A"]), 30),
            vec![TimeRange::from_start_end(END_OF_DAY - 30, END_OF_DAY, true)]
        );
        assert_eq!(events.iter().available_times(&set(&["A"]), 31), Vec::<TimeRange>::new());
    }

    #[test]
    fn optional_only_requests_never_fall_back() {
        let events = vec![Event::new("1", WHOLE_DAY, vec!["A"])];

        let mut request = MeetingRequest::new(Vec::<String>::new(), 30);
        request.add_optional_attendee("A");

        assert_eq!(query(&events, &request), Vec::<TimeRange>::new());
    }

    #[test]
    fn query_all_keeps_request_order() {
        let events = vec![Event::new(
            "1",
            TimeRange::from_start_duration(time_in_minutes(8, 0), 60),
            vec!["A"],
        )];

        let requests = vec![
            MeetingRequest::new(vec!["A"], 30),
            MeetingRequest::new(vec!["B"], 30),
            MeetingRequest::new(vec!["A"], END_OF_DAY + 1),
        ];

        assert_eq!(
            query_all(&events, &requests),
            vec![
                vec![
                    TimeRange::from_start_end(START_OF_DAY, time_in_minutes(8, 0), false),
                    TimeRange::from_start_end(time_in_minutes(9, 0), END_OF_DAY, true),
                ],
                vec![WHOLE_DAY],
                vec![],
            ]
        );
    }
}
