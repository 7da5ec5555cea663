use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A request for a slot of `duration` minutes.
///
/// Conflicts of mandatory attendees are always honored. Optional attendees
/// are only honored when a slot exists that works for everyone.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct MeetingRequest {
    attendees: BTreeSet<String>,
    #[serde(default, rename = "optionalAttendees")]
    optional_attendees: BTreeSet<String>,
    duration: i32,
}

impl MeetingRequest {
    /// # Examples
    /// ```
    /// use meeting_query::meeting::MeetingRequest;
    ///
    /// let mut request = MeetingRequest::new(vec!["A"], 30);
    /// request.add_optional_attendee("B");
    ///
    /// assert!(request.attendees().contains("A"));
    /// assert!(request.optional_attendees().contains("B"));
    /// assert_eq!(request.duration(), 30);
    /// ```
    pub fn new<I, S>(attendees: I, duration: i32) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    pub fn add_optional_attendee(&mut self, attendee: &str) {
        self.optional_attendees.insert(attendee.to_string());
    }

    /// The mandatory attendees
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Mandatory and optional attendees together. Someone listed in both
    /// sets appears once.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}
