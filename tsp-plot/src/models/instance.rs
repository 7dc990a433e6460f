#[cfg(test)]
#[path = "../../tests/unit/models/instance_test.rs"]
mod instance_test;

use crate::utils::{GenericError, GenericResult};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Represents a TSP instance: point coordinates and per-point costs.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    xs: Vec<f64>,
    ys: Vec<f64>,
    costs: Vec<f64>,
}

impl Instance {
    /// Creates a new instance from parallel sequences of equal length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, costs: Vec<f64>) -> GenericResult<Self> {
        if xs.len() != ys.len() || xs.len() != costs.len() {
            return Err(format!(
                "instance columns have different length: x={}, y={}, cost={}",
                xs.len(),
                ys.len(),
                costs.len()
            )
            .into());
        }

        if xs.is_empty() {
            return Err("instance has no points".into());
        }

        if xs.iter().chain(ys.iter()).chain(costs.iter()).any(|value| !value.is_finite()) {
            return Err("instance contains non-finite values".into());
        }

        Ok(Self { xs, ys, costs })
    }

    /// Returns amount of points.
    pub fn size(&self) -> usize {
        self.xs.len()
    }

    /// Returns x-coordinates.
    pub fn xs(&self) -> &[f64] {
        self.xs.as_slice()
    }

    /// Returns y-coordinates.
    pub fn ys(&self) -> &[f64] {
        self.ys.as_slice()
    }

    /// Returns per-point costs.
    pub fn costs(&self) -> &[f64] {
        self.costs.as_slice()
    }

    /// Returns coordinate of the point with given index.
    pub fn coordinate(&self, idx: usize) -> Option<(f64, f64)> {
        self.xs.get(idx).zip(self.ys.get(idx)).map(|(&x, &y)| (x, y))
    }

    /// Returns min and max coordinates as `((min_x, max_x), (min_y, max_y))`.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let min_max = |values: &[f64]| {
            values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| (min.min(v), max.max(v)))
        };

        (min_max(self.xs()), min_max(self.ys()))
    }
}

/// A trait to read an instance from semicolon separated values without header.
pub trait CsvInstance {
    /// Reads instance.
    fn read_csv_instance(self) -> GenericResult<Instance>;
}

impl<R: Read> CsvInstance for BufReader<R> {
    fn read_csv_instance(self) -> GenericResult<Instance> {
        read_rows(self).and_then(create_instance)
    }
}

impl CsvInstance for String {
    fn read_csv_instance(self) -> GenericResult<Instance> {
        BufReader::new(self.as_bytes()).read_csv_instance()
    }
}

/// Reads instance from the file with given path.
pub fn read_instance_file(path: &Path) -> GenericResult<Instance> {
    File::open(path)
        .map_err(GenericError::from)
        .and_then(|file| BufReader::new(file).read_csv_instance())
        .map_err(|err| err.context(&format!("cannot read instance '{}'", path.display())))
}

fn read_rows<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Vec<f64>>> {
    let mut reader =
        ReaderBuilder::new().has_headers(false).delimiter(b';').flexible(true).trim(Trim::All).from_reader(reader);

    reader
        .records()
        .enumerate()
        .map(|(row_idx, record)| {
            let record = record.map_err(|err| format!("cannot read row {}: '{err}'", row_idx + 1))?;

            record
                .iter()
                .map(|field| {
                    field
                        .parse::<f64>()
                        .map_err(|err| format!("cannot parse value '{field}' in row {}: '{err}'", row_idx + 1))
                        .and_then(|value| {
                            if value.is_finite() {
                                Ok(value)
                            } else {
                                Err(format!("value '{field}' in row {} is not a finite number", row_idx + 1))
                            }
                        })
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(GenericError::from)
        })
        .collect()
}

/// Accepts point per row layout (`x;y;cost`) or three rows with x, y and cost values.
fn create_instance(rows: Vec<Vec<f64>>) -> GenericResult<Instance> {
    if rows.is_empty() {
        return Err("instance has no points".into());
    }

    if rows.iter().all(|row| row.len() == 3) {
        let (xs, ys, costs) = rows.into_iter().fold(
            (Vec::new(), Vec::new(), Vec::new()),
            |(mut xs, mut ys, mut costs), row| {
                xs.push(row[0]);
                ys.push(row[1]);
                costs.push(row[2]);
                (xs, ys, costs)
            },
        );

        return Instance::new(xs, ys, costs);
    }

    match <[Vec<f64>; 3]>::try_from(rows) {
        Ok([xs, ys, costs]) => Instance::new(xs, ys, costs),
        Err(rows) => Err(format!(
            "expecting three values per row or three rows of equal length, got {} rows with lengths: {:?}",
            rows.len(),
            rows.iter().map(|row| row.len()).collect::<Vec<_>>()
        )
        .into()),
    }
}
