//! Integration tests for cursor traversal and playlist playback.

use patterns::collection::{CollectionError, OrderedContainer};
use patterns::demos::{run_demos, DemoKind};
use patterns::output::MemorySink;
use patterns::player::{playlist, PlaybackController, PlaybackState};
use patterns::Config;

#[test]
fn first_then_next_len_minus_one_times_ends_on_last() {
    let items: OrderedContainer<u32> = (0..7).collect();
    let mut cursor = items.cursor();
    cursor.first().unwrap();

    let mut results = Vec::new();
    for _ in 0..items.len() - 1 {
        results.push(cursor.next().unwrap());
    }

    assert_eq!(results.last(), Some(&None));
    assert!(results[..results.len() - 1].iter().all(Option::is_some));
    assert!(cursor.is_last());
}

#[test]
fn previous_from_start_propagates_out_of_bounds() {
    let items: OrderedContainer<&str> = ["a", "b"].into_iter().collect();
    let mut cursor = items.cursor();

    assert_eq!(
        cursor.previous(),
        Err(CollectionError::OutOfBounds { index: -1, len: 2 })
    );
}

#[test]
fn ten_track_playlist_end_to_end() {
    let tracks = playlist(10);
    let out = MemorySink::new();
    let mut controller = PlaybackController::new(&tracks, &out);

    while !controller.is_last() {
        controller.play();
    }
    controller.play();

    let expected: Vec<String> = (1..=10)
        .map(|n| format!("Playing track: Track {}", n))
        .collect();
    assert_eq!(out.lines(), expected);

    out.clear();
    controller.first().unwrap();
    controller.play();
    assert_eq!(out.lines(), ["Playing track: Track 1"]);

    out.clear();
    controller.last().unwrap();
    controller.play();
    assert_eq!(out.lines(), ["Playing track: Track 10"]);
    assert_eq!(controller.state(), PlaybackState::Ended);
}

#[test]
fn iterator_demo_output() {
    let out = MemorySink::new();
    run_demos(&[DemoKind::Iterator], &out, &Config::default(), |_| Ok(())).unwrap();

    insta::assert_snapshot!(out.contents(), @r"
    IteratorPattern:
    Tracks:
    Playing track: Track 1
    Playing track: Track 2
    Playing track: Track 3
    Playing track: Track 4
    Playing track: Track 5
    Playing track: Track 6
    Playing track: Track 7
    Playing track: Track 8
    Playing track: Track 9
    Playing track: Track 10
    Play first
    Playing track: Track 1
    Play last
    Playing track: Track 10
    End of playlist
    ");
}
