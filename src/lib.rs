pub mod event;
pub mod input;
pub mod meeting;
pub mod query;
pub mod time;

pub use event::Event;
pub use input::{QueryInput, ValidationError};
pub use meeting::MeetingRequest;
pub use query::{query, query_all, Available};
pub use time::{TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
