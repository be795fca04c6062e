//! Matrix sources: whitespace-separated text files and random fill.
//!
//! Both sources produce non-negative operands. Negative values are rejected
//! here, at the input boundary; the multipliers themselves accept any `i32`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use strassen_core::constants::{RANDOM_A_BOUND, RANDOM_B_BOUND};
use strassen_core::Matrix;
use strassen_orchestration::{MatrixSource, Operands};

/// Errors reading operand matrices.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{}: cannot open: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{}: read error: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}:{line}: invalid matrix element {token:?}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{}:{line}: negative matrix element {value}", .path.display())]
    Negative {
        path: PathBuf,
        line: usize,
        value: i32,
    },
}

/// Reads A and B from two text files, one matrix row per line.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub a_path: PathBuf,
    pub b_path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(a_path: impl Into<PathBuf>, b_path: impl Into<PathBuf>) -> Self {
        Self {
            a_path: a_path.into(),
            b_path: b_path.into(),
        }
    }
}

impl MatrixSource for FileSource {
    type Error = SourceError;

    fn load(&self, dim: usize) -> Result<Operands, SourceError> {
        Ok(Operands {
            a: read_matrix_file(&self.a_path, dim)?,
            b: read_matrix_file(&self.b_path, dim)?,
        })
    }
}

/// Read a `dim x dim` matrix from `path`.
pub fn read_matrix_file(path: &Path, dim: usize) -> Result<Matrix, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), dim, "reading matrix");
    parse_matrix(BufReader::new(file), path, dim)
}

/// Parse up to `dim` lines of up to `dim` whitespace-separated integers.
///
/// Extra lines and extra tokens are ignored; cells with no token stay zero.
pub fn parse_matrix(reader: impl BufRead, path: &Path, dim: usize) -> Result<Matrix, SourceError> {
    let mut m = Matrix::zeros(dim);
    for (r, line) in reader.lines().take(dim).enumerate() {
        let line = line.map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        for (c, token) in line.split_whitespace().take(dim).enumerate() {
            let value: i32 = token.parse().map_err(|_| SourceError::Parse {
                path: path.to_path_buf(),
                line: r + 1,
                token: token.to_string(),
            })?;
            if value < 0 {
                return Err(SourceError::Negative {
                    path: path.to_path_buf(),
                    line: r + 1,
                    value,
                });
            }
            m.set(r, c, value);
        }
    }
    Ok(m)
}

/// Fills A with values in `[0, 100)` and B with values in `[0, 101)`.
#[derive(Debug, Clone, Default)]
pub struct RandomSource {
    /// Fixed seed for reproducible operands; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl RandomSource {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl MatrixSource for RandomSource {
    type Error = std::convert::Infallible;

    fn load(&self, dim: usize) -> Result<Operands, Self::Error> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(dim, seed = ?self.seed, "generating random operands");
        let a = Matrix::from_fn(dim, |_, _| rng.random_range(0..RANDOM_A_BOUND));
        let b = Matrix::from_fn(dim, |_, _| rng.random_range(0..RANDOM_B_BOUND));
        Ok(Operands { a, b })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    fn parse(text: &str, dim: usize) -> Result<Matrix, SourceError> {
        parse_matrix(Cursor::new(text), Path::new("test.txt"), dim)
    }

    #[test]
    fn parses_rows() {
        let m = parse("1 2\n3 4\n", 2).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap());
    }

    #[test]
    fn ignores_extra_tokens_and_lines() {
        let m = parse("1 2 9\n3   4\n5 6\n", 2).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap());
    }

    #[test]
    fn short_input_leaves_zeros() {
        let m = parse("7\n", 2).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![7, 0], vec![0, 0]]).unwrap());
    }

    #[test]
    fn tabs_and_crlf_are_whitespace() {
        let m = parse("1\t2\r\n3\t4\r\n", 2).unwrap();
        assert_eq!(m.get(1, 1), 4);
    }

    #[test]
    fn rejects_negative() {
        let err = parse("1 2\n3 -4\n", 2).unwrap_err();
        assert!(matches!(err, SourceError::Negative { line: 2, value: -4, .. }));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse("1 x\n", 2).unwrap_err();
        assert!(matches!(err, SourceError::Parse { line: 1, ref token, .. } if token == "x"));
        assert_eq!(err.to_string(), "test.txt:1: invalid matrix element \"x\"");
    }

    #[test]
    fn file_source_reads_both() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        writeln!(File::create(&a).unwrap(), "1 2\n3 4").unwrap();
        writeln!(File::create(&b).unwrap(), "5 6\n7 8").unwrap();

        let ops = FileSource::new(&a, &b).load(2).unwrap();
        assert_eq!(ops.a.get(1, 0), 3);
        assert_eq!(ops.b.get(0, 1), 6);
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = FileSource::new(dir.path().join("a.txt"), dir.path().join("b.txt"));
        assert!(matches!(src.load(2), Err(SourceError::Open { .. })));
    }

    #[test]
    fn random_values_in_range() {
        let ops = RandomSource::new(Some(42)).load(16).unwrap();
        for row in ops.a.rows() {
            assert!(row.iter().all(|v| (0..RANDOM_A_BOUND).contains(v)));
        }
        for row in ops.b.rows() {
            assert!(row.iter().all(|v| (0..RANDOM_B_BOUND).contains(v)));
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let first = RandomSource::new(Some(7)).load(4).unwrap();
        let second = RandomSource::new(Some(7)).load(4).unwrap();
        assert_eq!(first, second);
    }
}
