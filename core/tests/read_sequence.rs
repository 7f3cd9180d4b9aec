use smart_doc_gen_core::{Completion, ReadOrdering, ReadSequencer, ReadTicket};

#[test]
fn tickets_increase_monotonically() {
    let mut sequencer = ReadSequencer::default();
    assert_eq!(sequencer.latest(), None);
    let first = sequencer.begin();
    let second = sequencer.begin();
    assert!(second > first);
    assert_eq!(sequencer.latest(), Some(second));
}

#[test]
fn last_completion_applies_every_read() {
    let mut sequencer = ReadSequencer::new(ReadOrdering::LastCompletion);
    let first = sequencer.begin();
    let second = sequencer.begin();
    assert_eq!(sequencer.complete(second), Completion::Apply);
    assert_eq!(sequencer.complete(first), Completion::Apply);
}

#[test]
fn latest_selection_drops_older_completion() {
    let mut sequencer = ReadSequencer::new(ReadOrdering::LatestSelection);
    let first = sequencer.begin();
    let second = sequencer.begin();
    assert_eq!(sequencer.complete(second), Completion::Apply);
    assert_eq!(
        sequencer.complete(first),
        Completion::Stale {
            ticket: first,
            newest: second,
        }
    );
}

#[test]
fn latest_selection_drops_read_overtaken_by_pending_selection() {
    let mut sequencer = ReadSequencer::new(ReadOrdering::LatestSelection);
    let first = sequencer.begin();
    let second = sequencer.begin();
    assert!(matches!(sequencer.complete(first), Completion::Stale { .. }));
    assert_eq!(sequencer.complete(second), Completion::Apply);
}

#[test]
fn latest_selection_applies_sequential_reads() {
    let mut sequencer = ReadSequencer::new(ReadOrdering::LatestSelection);
    for expected in 1..=4 {
        let ticket = sequencer.begin();
        assert_eq!(ticket, ReadTicket(expected));
        assert_eq!(sequencer.complete(ticket), Completion::Apply);
    }
}

#[test]
fn duplicate_completion_is_stale_under_latest_selection() {
    let mut sequencer = ReadSequencer::new(ReadOrdering::LatestSelection);
    let ticket = sequencer.begin();
    assert_eq!(sequencer.complete(ticket), Completion::Apply);
    assert!(matches!(sequencer.complete(ticket), Completion::Stale { .. }));
}

#[test]
fn ordering_round_trips_through_strings() {
    for ordering in [ReadOrdering::LastCompletion, ReadOrdering::LatestSelection] {
        assert_eq!(ordering.to_string().parse::<ReadOrdering>(), Ok(ordering));
    }
    assert_eq!("latest_selection".parse::<ReadOrdering>(), Ok(ReadOrdering::LatestSelection));
    assert!("newest".parse::<ReadOrdering>().is_err());
}
