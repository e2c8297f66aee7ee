//! Playlist demo driving the list contract end to end.
//!
//! The same routine runs over every backing, showing that code written
//! against [`PositionalList`] never needs to know how a list stores its
//! entries.

use poslist::prelude::*;

/// A playlist entry ordered by rating, then title.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Track {
    rating: u8,
    title: &'static str,
}

const TRACKS: [Track; 5] = [
    Track { rating: 3, title: "Blue in Green" },
    Track { rating: 5, title: "So What" },
    Track { rating: 2, title: "Flamenco Sketches" },
    Track { rating: 4, title: "All Blues" },
    Track { rating: 5, title: "Freddie Freeloader" },
];

fn show<L>(label: &str, list: &L) -> Result<()>
where
    L: PositionalList<Track> + ?Sized,
{
    println!("{label} ({} tracks):", list.len());
    for position in 1..=list.len() {
        let track = list.get(position)?;
        println!("  {position}. [{}] {}", track.rating, track.title);
    }
    Ok(())
}

fn run<L>(name: &str, list: &mut L) -> Result<()>
where
    L: PositionalList<Track> + ?Sized,
{
    println!("== {name} ==");

    // New tracks always go to the front of the queue.
    for track in TRACKS {
        if !list.insert(1, track) {
            println!("  (list is full, track dropped)");
        }
    }
    show("queued", list)?;

    // Listener skips the second track.
    if list.remove(2) {
        show("after skipping track 2", list)?;
    }

    // Sort the remainder by rating; ties keep their queue order.
    insertion_sort(list)?;
    show("sorted by rating", list)?;

    list.clear();
    println!("cleared, empty = {}\n", list.is_empty());
    Ok(())
}

fn main() -> Result<()> {
    run("BoundedList<Track, 64>", &mut BoundedList::<Track, 64>::new())?;
    run("ChainedList<Track>", &mut ChainedList::new())?;
    run("SharedChainedList<Track>", &mut SharedChainedList::new())?;

    // The boolean protocol in action: an out-of-range insert is refused and
    // the list is left alone.
    let mut list = BoundedList::<Track, 64>::new();
    assert!(!list.insert(2, TRACKS[0].clone()));
    assert!(list.is_empty());

    // Accessing an empty list reports a distinct error from a bad position.
    match list.get(1) {
        Err(error) => println!("expected failure: {error}"),
        Ok(track) => println!("unexpected entry: {track:?}"),
    }

    Ok(())
}
