use crate::time::{TimeRange, ORDER_BY_START};
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Something already on the calendar: a set of attendees are busy for the
/// duration of `when`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Event {
    label: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Compares events by the start of their time range.
    pub const ORDER_BY_START: fn(&Event, &Event) -> Ordering = order_by_start;

    /// Constructs a new Event. The label is only used for debugging.
    ///
    /// # Examples
    /// ```
    /// use meeting_query::{event::Event, time::TimeRange};
    ///
    /// let event = Event::new("Standup", TimeRange::from_start_duration(540, 15), vec!["A", "B"]);
    ///
    /// assert_eq!(event.when().duration(), 15);
    /// assert!(event.attendees().contains("A"));
    /// ```
    pub fn new<I, S>(label: &str, when: TimeRange, attendees: I) -> Event
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            label: label.to_string(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// `true` when at least one of `attendees` is busy with this event.
    pub fn is_attended_by(&self, attendees: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(attendees)
    }
}

fn order_by_start(a: &Event, b: &Event) -> Ordering {
    ORDER_BY_START(&a.when, &b.when)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_is_set_intersection() {
        let event = Event::new("1", TimeRange::from_start_duration(0, 30), vec!["A", "B"]);

        let wanted: BTreeSet<String> = vec!["B".to_string(), "C".to_string()].into_iter().collect();
        assert!(event.is_attended_by(&wanted));

        let wanted: BTreeSet<String> = vec!["C".to_string()].into_iter().collect();
        assert!(!event.is_attended_by(&wanted));

        assert!(!event.is_attended_by(&BTreeSet::new()));
    }

    #[test]
    fn duplicate_attendees_collapse() {
        let event = Event::new("1", TimeRange::from_start_duration(0, 30), vec!["A", "A"]);

        assert_eq!(event.attendees().len(), 1);
        assert_eq!(event.label(), "1");
    }

    #[test]
    fn sorts_by_start_keeping_input_order_on_ties() {
        let first = Event::new("first", TimeRange::from_start_duration(60, 60), vec!["A"]);
        let second = Event::new("second", TimeRange::from_start_duration(60, 30), vec!["B"]);
        let earliest = Event::new("earliest", TimeRange::from_start_duration(0, 30), vec!["C"]);

        let mut events = vec![first.clone(), second.clone(), earliest.clone()];
        events.sort_by(Event::ORDER_BY_START);

        assert_eq!(events, vec![earliest, first, second]);
    }
}
