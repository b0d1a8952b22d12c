#[macro_use]
extern crate assert_matches;

use rs_word_search::*;

use std::io::{self, BufRead, Cursor, Read};

#[test]
fn from_reader_skips_blank_lines() -> Result<(), WordSearchError> {
    let cursor = Cursor::new(String::from("\n\nice cream\n  dog \n\t\ncat\n"));

    let words = WordList::from_reader(cursor)?;

    assert_eq!(words.len(), 3);
    assert_eq!(&*words, &["ICECREAM", "DOG", "CAT"]);
    Ok(())
}

#[test]
fn from_reader_keeps_duplicates_in_order() -> Result<(), WordSearchError> {
    let cursor = Cursor::new(String::from("b\na\nb\n"));

    let words = WordList::from_reader(cursor)?;

    assert_eq!(&*words, &["B", "A", "B"]);
    Ok(())
}

#[test]
fn from_iterator_accepts_owned_strings() {
    let words = WordList::from_iterator(vec!["Hot Dog".to_string(), "".to_string()]);

    assert_eq!(&*words, &["HOTDOG"]);
    assert_eq!(words.longest(), 6);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[test]
fn from_reader_surfaces_io_errors() {
    assert_matches!(
        WordList::from_reader(FailingReader),
        Err(WordSearchError::Io(message)) if message.contains("disk on fire")
    );
}

#[test]
fn word_list_feeds_placer() -> Result<(), WordSearchError> {
    let words = WordList::from_iterator(["sun", "moon", "star"]);

    let puzzle = generate_word_search(&words, PlacerConfig::default().with_size(6, 6))?;

    assert_eq!(puzzle.placements.len(), 3);
    assert_eq!(puzzle.placements[0].word, "MOON");
    Ok(())
}
