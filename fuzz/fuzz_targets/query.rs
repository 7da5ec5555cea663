#![no_main]
use libfuzzer_sys::fuzz_target;
use meeting_query::{query, Available, Event, MeetingRequest, TimeRange, WHOLE_DAY};

fuzz_target!(|data: (Vec<Event>, MeetingRequest)| {
    #[cfg(feature = "log")]
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Trace)
        .chain(std::io::stdout())
        .apply();

    let (events, request) = data;
    let result = query(&events, &request);

    assert_eq!(result, query(&events, &request), "Query is not repeatable");

    if request.duration() > WHOLE_DAY.duration() {
        assert!(result.is_empty(), "Slots returned for a meeting longer than a day");
        return;
    }

    // zero and negative durations may report empty or repeated gaps
    if request.duration() <= 0 {
        return;
    }

    assert!(
        result.windows(2).all(|w| w[0].start() < w[1].start() && !w[0].overlaps(w[1])),
        "Slots are not ascending and disjoint: {:?}",
        result
    );

    assert!(
        result.iter().all(|slot| WHOLE_DAY.contains(*slot)),
        "Slot outside of the day: {:?}",
        result
    );

    let combined = events.iter().available_times(&request.all_attendees(), request.duration());
    if combined.is_empty() && !request.attendees().is_empty() {
        assert_eq!(
            result,
            events.iter().available_times(request.attendees(), request.duration())
        );
    } else {
        assert_eq!(result, combined);
    }

    // no slot may cut into an event of a mandatory attendee
    let busy: Vec<TimeRange> = events
        .iter()
        .filter(|event| event.is_attended_by(request.attendees()))
        .map(|event| event.when())
        .collect();
    if let Some(slot) = result
        .iter()
        .find(|slot| busy.iter().any(|block| block.overlaps(**slot)))
    {
        panic!("Returned slot {} overlaps a mandatory attendee's event", slot);
    }
});
