//! Ground-truth trajectory CSV reader.
//!
//! Expected layout, one header row followed by data rows:
//!
//! ```text
//! secs,nsecs,x,y,yaw
//! 1600000000,250000000,1.25,-0.5,0.785
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::types::{PoseSample, Stamp, Trajectory};
use crate::error::{EvalError, Result};

const COLUMNS: [&str; 5] = ["secs", "nsecs", "x", "y", "yaw"];
const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Reader for a ground-truth CSV file.
#[derive(Debug, Clone)]
pub struct GroundTruthCsv {
    path: PathBuf,
}

impl GroundTruthCsv {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the file into a validated trajectory.
    pub fn read(&self) -> Result<Trajectory> {
        let file = std::fs::File::open(&self.path)?;
        let trajectory = read_ground_truth(file)?;
        log::info!(
            "Loaded {} ground truth samples from {} ({:.1}s)",
            trajectory.len(),
            self.path.display(),
            trajectory.duration_secs()
        );
        Ok(trajectory)
    }
}

/// Parse ground-truth rows from any reader.
pub fn read_ground_truth<R: Read>(reader: R) -> Result<Trajectory> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        if record.iter().all(str::is_empty) {
            continue;
        }
        samples.push(parse_row(&record, line)?);
    }

    Trajectory::new(samples)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<PoseSample> {
    if record.len() != COLUMNS.len() {
        return Err(EvalError::GroundTruth {
            line,
            reason: format!(
                "expected {} fields ({}), found {}",
                COLUMNS.len(),
                COLUMNS.join(","),
                record.len()
            ),
        });
    }

    let secs: u32 = field(record, 0, line)?;
    let nsecs: u32 = field(record, 1, line)?;
    if nsecs >= NANOS_PER_SEC {
        return Err(EvalError::GroundTruth {
            line,
            reason: format!("nsecs out of range: {}", nsecs),
        });
    }

    let time = Stamp::new(secs, nsecs).to_secs();
    Ok(PoseSample::new(
        time,
        field(record, 2, line)?,
        field(record, 3, line)?,
        field(record, 4, line)?,
    ))
}

fn field<T: FromStr>(record: &StringRecord, index: usize, line: u64) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = record.get(index).unwrap_or_default();
    raw.parse().map_err(|e| EvalError::GroundTruth {
        line,
        reason: format!("invalid {} '{}': {}", COLUMNS[index], raw, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_rows() {
        let data = "secs,nsecs,x,y,yaw\n\
                    10,500000000,1.0,2.0,0.5\n\
                    11,0,1.5,2.5,-3.14\n";
        let trajectory = read_ground_truth(data.as_bytes()).unwrap();

        assert_eq!(trajectory.len(), 2);
        assert_relative_eq!(trajectory[0].time, 10.5);
        assert_eq!(trajectory[0].x, 1.0);
        assert_eq!(trajectory[1].yaw, -3.14);
    }

    #[test]
    fn test_time_matches_stamp_conversion() {
        let data = "secs,nsecs,x,y,yaw\n1600000000,123456789,0,0,0\n";
        let trajectory = read_ground_truth(data.as_bytes()).unwrap();

        assert_eq!(
            trajectory[0].time,
            Stamp::new(1_600_000_000, 123_456_789).to_secs()
        );
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let data = "secs, nsecs, x, y, yaw\n 1 , 0 , 0.5 , 0.5 , 0.1 \n\n2,0,1,1,0.2\n";
        let trajectory = read_ground_truth(data.as_bytes()).unwrap();
        assert_eq!(trajectory.len(), 2);
    }

    #[test]
    fn test_wrong_arity_names_line() {
        let data = "secs,nsecs,x,y,yaw\n1,0,0,0,0\n2,0,0,0\n";
        match read_ground_truth(data.as_bytes()) {
            Err(EvalError::GroundTruth { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bad_number_names_line() {
        let data = "secs,nsecs,x,y,yaw\n1,0,abc,0,0\n";
        match read_ground_truth(data.as_bytes()) {
            Err(EvalError::GroundTruth { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("x"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_nsecs_out_of_range() {
        let data = "secs,nsecs,x,y,yaw\n1,1000000000,0,0,0\n";
        assert!(matches!(
            read_ground_truth(data.as_bytes()),
            Err(EvalError::GroundTruth { line: 2, .. })
        ));
    }

    #[test]
    fn test_header_only_is_invalid() {
        let data = "secs,nsecs,x,y,yaw\n";
        assert!(matches!(
            read_ground_truth(data.as_bytes()),
            Err(EvalError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unsorted_rows_are_invalid() {
        let data = "secs,nsecs,x,y,yaw\n2,0,0,0,0\n1,0,0,0,0\n";
        assert!(matches!(
            read_ground_truth(data.as_bytes()),
            Err(EvalError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gt.csv");
        std::fs::write(&path, "secs,nsecs,x,y,yaw\n5,0,1,1,0\n").unwrap();

        let trajectory = GroundTruthCsv::new(&path).read().unwrap();
        assert_eq!(trajectory.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = GroundTruthCsv::new(temp_dir.path().join("missing.csv")).read();
        assert!(matches!(result, Err(EvalError::Io(_))));
    }
}
