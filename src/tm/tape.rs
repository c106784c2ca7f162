//! Lazily-extended tape for Turing machine execution.

use super::Direction;
use std::collections::VecDeque;

/// A conceptually bi-infinite tape realized as a finite buffer.
///
/// The buffer grows on demand whenever the head moves past either edge;
/// newly exposed cells are initialized to the blank symbol. The tape is
/// query-scoped: created from the input word, mutated only by the step loop
/// that owns it, and dropped when the query completes.
#[derive(Debug, Clone)]
pub(crate) struct Tape {
    cells: VecDeque<char>,
    head: usize,
    blank: char,
}

impl Tape {
    /// Lay out `word` starting at the head position; an empty word exposes
    /// a single blank cell.
    pub fn new(word: &[char], blank: char) -> Self {
        let mut cells: VecDeque<char> = word.iter().copied().collect();
        if cells.is_empty() {
            cells.push_back(blank);
        }
        Self {
            cells,
            head: 0,
            blank,
        }
    }

    /// Symbol under the head.
    pub fn read(&self) -> char {
        self.cells[self.head]
    }

    /// Overwrite the cell under the head.
    pub fn write(&mut self, symbol: char) {
        self.cells[self.head] = symbol;
    }

    /// Move the head one cell, extending the buffer with a blank when the
    /// move crosses an edge.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.head == 0 {
                    self.cells.push_front(self.blank);
                } else {
                    self.head -= 1;
                }
            }
            Direction::Right => {
                self.head += 1;
                if self.head == self.cells.len() {
                    self.cells.push_back(self.blank);
                }
            }
            Direction::Stay => {}
        }
    }

    /// Current buffer contents, left to right.
    #[cfg(test)]
    pub fn cells(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().copied()
    }

    /// Current head offset within the buffer.
    #[cfg(test)]
    pub fn head(&self) -> usize {
        self.head
    }
}
