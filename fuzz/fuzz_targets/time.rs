#![no_main]
use libfuzzer_sys::fuzz_target;
use meeting_query::time::{TimeRange, ORDER_BY_START, WHOLE_DAY};

fuzz_target!(|data: (Vec<TimeRange>, TimeRange)| {
    let (mut ranges, probe) = data;

    assert!(ranges.iter().all(|r| r.start() <= r.end()), "Generated an inverted range");
    assert!(ranges.iter().all(|r| WHOLE_DAY.contains(*r)), "Range outside of the day");

    for r in ranges.iter() {
        assert_eq!(r.overlaps(probe), probe.overlaps(*r), "Overlap is not symmetric");
        assert_eq!(
            TimeRange::from_start_duration(r.start(), r.duration()),
            *r,
            "Duration does not rebuild the range"
        );
    }

    let before = ranges.clone();
    ranges.sort_by(ORDER_BY_START);

    assert!(
        ranges.windows(2).all(|w| w[0].start() <= w[1].start()),
        "Ranges not sorted by start"
    );

    // equal starts keep their input order
    for w in ranges.windows(2).filter(|w| w[0].start() == w[1].start()) {
        let first = before.iter().position(|r| *r == w[0]);
        let last = before.iter().rposition(|r| *r == w[1]);
        assert!(first <= last, "Sort is not stable");
    }
});
