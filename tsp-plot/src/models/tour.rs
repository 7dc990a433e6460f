#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::Instance;
use crate::utils::{GenericError, GenericResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Represents a tour: an ordered sequence of point indices which is implicitly closed into a cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    indices: Vec<usize>,
}

impl Tour {
    /// Creates a new tour from point indices in visiting order.
    pub fn new(indices: Vec<usize>) -> GenericResult<Self> {
        if indices.is_empty() {
            return Err("tour is empty".into());
        }

        Ok(Self { indices })
    }

    /// Returns point indices in visiting order.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Returns point indices with the first one appended to the end.
    pub fn closed(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().chain(self.indices.first()).copied()
    }

    /// Returns consecutive pairs of the closed tour.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.closed().zip(self.closed().skip(1))
    }

    /// Checks that every index references a point of the instance.
    pub fn validate(&self, instance: &Instance) -> GenericResult<()> {
        match self.indices.iter().find(|&&idx| idx >= instance.size()) {
            Some(idx) => Err(format!("index {idx} is out of range, instance has {} points", instance.size()).into()),
            None => Ok(()),
        }
    }

    /// Returns true if the tour visits every point of the instance exactly once.
    pub fn is_permutation(&self, size: usize) -> bool {
        let unique = self.indices.iter().filter(|&&idx| idx < size).collect::<HashSet<_>>();

        self.indices.len() == size && unique.len() == size
    }
}

/// A trait to read a tour from text format: one index per line.
pub trait TextTour {
    /// Reads tour.
    fn read_tour(self) -> GenericResult<Tour>;
}

impl<R: Read> TextTour for BufReader<R> {
    fn read_tour(self) -> GenericResult<Tour> {
        let indices = self
            .lines()
            .enumerate()
            .filter_map(|(line_idx, line)| match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => {
                    let value = line.trim();
                    Some(
                        value
                            .parse::<usize>()
                            .map_err(|err| format!("cannot parse index '{value}' on line {}: '{err}'", line_idx + 1)),
                    )
                }
                Err(err) => Some(Err(format!("cannot read line {}: '{err}'", line_idx + 1))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Tour::new(indices)
    }
}

impl TextTour for String {
    fn read_tour(self) -> GenericResult<Tour> {
        BufReader::new(self.as_bytes()).read_tour()
    }
}

/// Reads tour from the file with given path.
pub fn read_tour_file(path: &Path) -> GenericResult<Tour> {
    File::open(path)
        .map_err(GenericError::from)
        .and_then(|file| BufReader::new(file).read_tour())
        .map_err(|err| err.context(&format!("cannot read tour '{}'", path.display())))
}
