use crate::event::Event;
use crate::meeting::MeetingRequest;
use crate::query::query_all;
use crate::time::{TimeRange, END_OF_DAY, START_OF_DAY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// No day has more minutes than this, so no day can hold more
/// non-empty events either.
pub const MAX_EVENTS: usize = END_OF_DAY as usize;
pub const MAX_ATTENDEES: usize = 1000;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported length of input. Expected at most {expected}, got {found}")]
    UnsupportedLength { expected: usize, found: usize },
    #[error("Invalid TimeRange found at {location}: [{start}, {end}) does not fit in a day")]
    InvalidTimeRange {
        location: String,
        start: i32,
        end: i32,
    },
    #[error("Meeting duration must not be negative, got {duration}")]
    NegativeDuration { duration: i32 },
}

/// One day of events and the meetings to find room for.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryInput {
    pub events: Vec<Event>,
    pub requests: Vec<MeetingRequest>,
}

impl QueryInput {
    pub fn new(events: Vec<Event>, requests: Vec<MeetingRequest>) -> Self {
        QueryInput { events, requests }
    }

    /// Rejects input a caller should never have produced. The query itself
    /// accepts all of it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.events.len() > MAX_EVENTS {
            return Err(ValidationError::UnsupportedLength {
                expected: MAX_EVENTS,
                found: self.events.len(),
            });
        }

        for event in self.events.iter() {
            if event.attendees().len() > MAX_ATTENDEES {
                return Err(ValidationError::UnsupportedLength {
                    expected: MAX_ATTENDEES,
                    found: event.attendees().len(),
                });
            }

            let when = event.when();
            if !fits_in_day(when) {
                return Err(ValidationError::InvalidTimeRange {
                    location: format!("Event ({})", event.label()),
                    start: when.start(),
                    end: when.end(),
                });
            }
        }

        for request in self.requests.iter() {
            let attendees = request.all_attendees().len();
            if attendees > MAX_ATTENDEES {
                return Err(ValidationError::UnsupportedLength {
                    expected: MAX_ATTENDEES,
                    found: attendees,
                });
            }

            if request.duration() < 0 {
                return Err(ValidationError::NegativeDuration {
                    duration: request.duration(),
                });
            }
        }

        Ok(())
    }

    /// Validates, then answers every request in order.
    pub fn run(&self) -> Result<Vec<Vec<TimeRange>>, ValidationError> {
        self.validate()?;

        Ok(query_all(&self.events, &self.requests))
    }
}

fn fits_in_day(when: TimeRange) -> bool {
    START_OF_DAY <= when.start() && when.start() <= when.end() && when.end() <= END_OF_DAY
}
