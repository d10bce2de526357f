//! Text and CSV renderings of an [`EvaluationReport`].
//!
//! Three outputs are produced:
//!
//! - a human-readable report (INDIVIDUAL ENTRIES, OUTLIERS, ANALYSIS)
//! - `<stem>_error.csv` with the ANALYSIS, OUTLIERS and INDIVIDUAL ENTRIES blocks
//! - `<stem>_error_graph_data.csv` with `elapsed,position_error,orientation_error`
//!   rows for plotting
//!
//! `<stem>` is the log file name without its directory and final extension.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::evaluation::{EvaluationReport, GraphPoint, OutlierEntry, OutlierKind};

const SEPARATOR_WIDTH: usize = 99;
const ERROR_CSV_SUFFIX: &str = "_error.csv";
const GRAPH_CSV_SUFFIX: &str = "_error_graph_data.csv";
const CSV_COLUMNS: &str = "Time Stamp, Position Error, Orientation Error";

/// Report file name stem derived from a log path.
///
/// `"/data/run_03.bag"` becomes `"run_03"`; only the last extension is
/// removed.
pub fn report_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "report".to_string())
}

/// Render the human-readable report.
///
/// With `include_entries` false the per-sample listing is left out and only
/// the OUTLIERS and ANALYSIS sections are written.
pub fn write_text_report<W: Write>(
    out: &mut W,
    report: &EvaluationReport,
    include_entries: bool,
) -> io::Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    if include_entries {
        writeln!(out, "{}", separator)?;
        writeln!(out, "INDIVIDUAL ENTRIES\n")?;
        for entry in &report.entries {
            writeln!(
                out,
                "Time: [{:014.3}], Position Error: [{:07.5}], Orientation Error: [{:07.5}]",
                entry.time, entry.position_error, entry.orientation_error
            )?;
        }
    }

    writeln!(out, "{}", separator)?;
    writeln!(out, "OUTLIERS\n")?;
    for outlier in &report.outliers {
        writeln!(out, "{}", text_outlier_line(outlier))?;
    }

    let summary = &report.summary;
    writeln!(out, "{}", separator)?;
    writeln!(out, "ANALYSIS\n")?;
    writeln!(
        out,
        "Total Entries: {}, failed to find {} entries in the bag file\n",
        summary.total_entries, summary.entries_not_found
    )?;
    writeln!(out, "Found {} outliers\n", summary.outlier_count)?;
    writeln!(out, "Counting Outliers:")?;
    writeln!(out, "Position Error Mean: [{:.5}]", summary.position_mean)?;
    writeln!(out, "Orientation Error Mean: [{:.5}]\n", summary.orientation_mean)?;
    writeln!(out, "Not Counting Outliers:")?;
    writeln!(out, "Position Error Mean: [{:.5}]", summary.position_mean_inliers)?;
    writeln!(
        out,
        "Orientation Error Mean: [{:.5}]\n",
        summary.orientation_mean_inliers
    )?;

    Ok(())
}

fn text_outlier_line(outlier: &OutlierEntry) -> String {
    let mut line = format!("Time: [{:014.3}], ", outlier.time);
    match (outlier.kind, outlier.position_error, outlier.orientation_error) {
        (OutlierKind::PositionOnly, Some(p), _) => {
            line.push_str(&format!("Position Error: [{:07.5}]", p));
        }
        // Pad so the column lines up with rows that lead with a position error
        (OutlierKind::OrientationOnly, _, Some(o)) => {
            line.push_str(&format!("{:27}Orientation Error: [{:07.5}]", "", o));
        }
        (OutlierKind::Both, Some(p), Some(o)) => {
            line.push_str(&format!(
                "Position Error: [{:07.5}], Orientation Error: [{:07.5}]",
                p, o
            ));
        }
        _ => {}
    }
    line
}

/// Render `<stem>_error.csv`.
pub fn write_error_csv<W: Write>(out: &mut W, report: &EvaluationReport) -> io::Result<()> {
    let summary = &report.summary;

    writeln!(out, "ANALYSIS")?;
    writeln!(out, "Total Entries,{}", summary.total_entries)?;
    writeln!(out, "Entries not Found,{}", summary.entries_not_found)?;
    writeln!(out, "Outliers Found, {}\n", summary.outlier_count)?;
    writeln!(out, "Counting Outliers")?;
    writeln!(out, "Position Error Mean,{:.7}", summary.position_mean)?;
    writeln!(out, "Orientation Error Mean,{:.7}\n", summary.orientation_mean)?;
    writeln!(out, "Not Counting Outliers")?;
    writeln!(out, "Position Error Mean,{:.7}", summary.position_mean_inliers)?;
    writeln!(
        out,
        "Orientation Error Mean,{:.7}\n\n",
        summary.orientation_mean_inliers
    )?;

    writeln!(out, "OUTLIERS")?;
    writeln!(out, "{}", CSV_COLUMNS)?;
    for outlier in &report.outliers {
        let mut row = format!("{:.3},", outlier.time);
        if let Some(p) = outlier.position_error {
            row.push_str(&format!("{:.5}", p));
        }
        if let Some(o) = outlier.orientation_error {
            row.push_str(&format!(",{:.5}", o));
        }
        writeln!(out, "{}", row)?;
    }

    write!(out, "\n\nINDIVIDUAL ENTRIES\n")?;
    writeln!(out, "{}", CSV_COLUMNS)?;
    for entry in &report.entries {
        writeln!(
            out,
            "{:.5},{:.5},{:.5}",
            entry.time, entry.position_error, entry.orientation_error
        )?;
    }
    write!(out, "\n\n")?;

    Ok(())
}

/// Render `<stem>_error_graph_data.csv`.
pub fn write_graph_csv<W: Write>(out: &mut W, graph: &[GraphPoint]) -> io::Result<()> {
    for point in graph {
        writeln!(
            out,
            "{:.5},{:.5},{:.5}",
            point.elapsed, point.position_error, point.orientation_error
        )?;
    }
    Ok(())
}

/// Paths of the CSV files written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub error_csv: PathBuf,
    pub graph_csv: PathBuf,
}

/// Writes the CSV reports of a run into a directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    directory: PathBuf,
    stem: String,
}

impl ReportWriter {
    pub fn new(directory: impl AsRef<Path>, stem: impl Into<String>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            stem: stem.into(),
        }
    }

    /// Writer whose stem is derived from the log file path.
    pub fn for_log(directory: impl AsRef<Path>, log_path: &Path) -> Self {
        Self::new(directory, report_stem(log_path))
    }

    pub fn files(&self) -> ReportFiles {
        ReportFiles {
            error_csv: self
                .directory
                .join(format!("{}{}", self.stem, ERROR_CSV_SUFFIX)),
            graph_csv: self
                .directory
                .join(format!("{}{}", self.stem, GRAPH_CSV_SUFFIX)),
        }
    }

    /// Write both CSV files, creating the directory if needed.
    pub fn write(&self, report: &EvaluationReport) -> Result<ReportFiles> {
        fs::create_dir_all(&self.directory)?;
        let files = self.files();

        let mut error_csv = BufWriter::new(File::create(&files.error_csv)?);
        write_error_csv(&mut error_csv, report)?;
        error_csv.flush()?;

        let mut graph_csv = BufWriter::new(File::create(&files.graph_csv)?);
        write_graph_csv(&mut graph_csv, &report.graph)?;
        graph_csv.flush()?;

        log::info!(
            "Wrote {} and {}",
            files.error_csv.display(),
            files.graph_csv.display()
        );
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{ReportEntry, ReportSummary};
    use tempfile::TempDir;

    fn sample_report() -> EvaluationReport {
        EvaluationReport {
            summary: ReportSummary {
                total_entries: 3,
                entries_not_found: 1,
                outlier_count: 2,
                position_mean: 0.5,
                orientation_mean: 0.25,
                position_std_dev: 0.1,
                orientation_std_dev: 0.05,
                position_mean_inliers: 0.125,
                orientation_mean_inliers: f64::NAN,
            },
            entries: vec![
                ReportEntry {
                    time: 100.0,
                    position_error: 0.1,
                    orientation_error: 0.2,
                },
                ReportEntry {
                    time: 100.5,
                    position_error: 1.2,
                    orientation_error: 0.3,
                },
                ReportEntry {
                    time: 101.0,
                    position_error: 0.2,
                    orientation_error: 0.25,
                },
            ],
            outliers: vec![
                OutlierEntry {
                    time: 100.5,
                    position_error: Some(1.2),
                    orientation_error: None,
                    kind: OutlierKind::PositionOnly,
                },
                OutlierEntry {
                    time: 101.0,
                    position_error: None,
                    orientation_error: Some(0.25),
                    kind: OutlierKind::OrientationOnly,
                },
            ],
            graph: vec![
                GraphPoint {
                    elapsed: 0.0,
                    position_error: 0.1,
                    orientation_error: 0.2,
                },
                GraphPoint {
                    elapsed: 0.5,
                    position_error: 1.2,
                    orientation_error: 0.3,
                },
            ],
        }
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_stem() {
        assert_eq!(report_stem(Path::new("/data/logs/run_03.bag")), "run_03");
        assert_eq!(report_stem(Path::new("archive.tar.gz")), "archive.tar");
        assert_eq!(report_stem(Path::new("plain")), "plain");
        assert_eq!(report_stem(Path::new("/")), "report");
    }

    #[test]
    fn test_text_report_sections() {
        let report = sample_report();
        let text = render(|out| write_text_report(out, &report, true));

        assert!(text.contains("INDIVIDUAL ENTRIES"));
        assert!(text.contains(
            "Time: [0000000100.000], Position Error: [0.10000], Orientation Error: [0.20000]"
        ));
        assert!(text.contains("Time: [0000000100.500], Position Error: [1.20000]\n"));
        assert!(text.contains(&format!(
            "Time: [0000000101.000], {}Orientation Error: [0.25000]\n",
            " ".repeat(27)
        )));
        assert!(text.contains("Total Entries: 3, failed to find 1 entries in the bag file"));
        assert!(text.contains("Found 2 outliers"));
        assert!(text.contains("Position Error Mean: [0.12500]"));
        assert!(text.contains("Orientation Error Mean: [NaN]"));
    }

    #[test]
    fn test_text_report_without_entries() {
        let report = sample_report();
        let text = render(|out| write_text_report(out, &report, false));

        assert!(!text.contains("INDIVIDUAL ENTRIES"));
        assert!(text.contains("OUTLIERS"));
        assert!(text.contains("ANALYSIS"));
    }

    #[test]
    fn test_error_csv_layout() {
        let report = sample_report();
        let csv = render(|out| write_error_csv(out, &report));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ANALYSIS");
        assert_eq!(lines[1], "Total Entries,3");
        assert_eq!(lines[2], "Entries not Found,1");
        assert_eq!(lines[3], "Outliers Found, 2");
        assert_eq!(lines[6], "Position Error Mean,0.5000000");

        let outliers = lines.iter().position(|l| *l == "OUTLIERS").unwrap();
        assert_eq!(lines[outliers + 1], CSV_COLUMNS);
        assert_eq!(lines[outliers + 2], "100.500,1.20000");
        assert_eq!(lines[outliers + 3], "101.000,,0.25000");

        let entries = lines
            .iter()
            .position(|l| *l == "INDIVIDUAL ENTRIES")
            .unwrap();
        assert!(entries > outliers);
        assert_eq!(lines[entries + 2], "100.00000,0.10000,0.20000");
        assert_eq!(lines[entries + 4], "101.00000,0.20000,0.25000");
    }

    #[test]
    fn test_graph_csv() {
        let report = sample_report();
        let csv = render(|out| write_graph_csv(out, &report.graph));

        assert_eq!(csv, "0.00000,0.10000,0.20000\n0.50000,1.20000,0.30000\n");
    }

    #[test]
    fn test_writer_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("reports");
        let writer = ReportWriter::for_log(&out_dir, Path::new("/logs/run_07.bag"));

        let files = writer.write(&sample_report()).unwrap();

        assert_eq!(files.error_csv, out_dir.join("run_07_error.csv"));
        assert_eq!(files.graph_csv, out_dir.join("run_07_error_graph_data.csv"));
        assert!(fs::read_to_string(&files.error_csv)
            .unwrap()
            .starts_with("ANALYSIS\n"));
        assert_eq!(
            fs::read_to_string(&files.graph_csv).unwrap().lines().count(),
            2
        );
    }
}
