use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::location::Location;
use crate::partition::{Partition, Path};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Written where the grid has a hole.
pub const HOLE: char = '.';

/// A finished board of single uppercase letters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LetterBoard {
    letters: Array2<char>,
}

impl LetterBoard {
    pub fn rows(&self) -> usize {
        self.letters.nrows()
    }

    pub fn cols(&self) -> usize {
        self.letters.ncols()
    }

    pub fn get(&self, location: Location) -> Option<char> {
        self.letters.get(location.as_index()).copied()
    }

    /// The letters under `path`, in path order.
    pub fn read_path(&self, path: &Path) -> String {
        path.iter().filter_map(|location| self.get(*location)).collect()
    }

    /// The board as rows of letters.
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.letters.rows().into_iter().map(|row| row.to_vec()).collect_vec()
    }
}

impl Display for LetterBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.letters.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}

// rows of one-letter strings, e.g. [["S", "T"], ["A", "R"]]
impl Serialize for LetterBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(self.rows()))?;
        for row in self.letters.rows() {
            rows.serialize_element(&row.to_vec())?;
        }
        rows.end()
    }
}

/// Write `words[i]` along the path of item `i`, one uppercased character per cell.
///
/// Cells of `grid` that no path covers get a random letter from `rng`.
/// Every word must have exactly as many characters as its path has cells.
pub fn write_letters<S, R>(words: &[S], partition: &Partition, grid: &Grid, rng: &mut R) -> Result<LetterBoard, PlacementError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let paths = partition.paths();
    if words.len() != paths.len() {
        return Err(PlacementError::WordMismatch { index: words.len().min(paths.len()) });
    }

    let mut cells: Array2<Option<char>> = Array2::from_elem(grid.shape.dim(), None);
    for (index, (word, path)) in words.iter().zip(paths).enumerate() {
        let word = word.as_ref();
        if word.chars().count() != path.len() {
            return Err(PlacementError::WordMismatch { index });
        }

        for (letter, location) in word.chars().zip(path.iter()) {
            match cells.get_mut(location.as_index()) {
                Some(cell) if grid.contains(*location) => *cell = Some(uppercase(letter)),
                _ => return Err(PlacementError::WordMismatch { index }),
            }
        }
    }

    let letters = Array2::from_shape_fn(cells.raw_dim(), |index| match cells[index] {
        Some(letter) => letter,
        None if grid.contains(Location::from(index)) => filler(rng),
        None => HOLE,
    });

    Ok(LetterBoard { letters })
}

fn filler<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET.choose(rng).map_or('A', |letter| char::from(*letter))
}

// keeps letters whose uppercase form is more than one character, like 'ß'
fn uppercase(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}
