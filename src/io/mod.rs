//! I/O infrastructure: trajectory sources, the bag format and report writers.

pub mod bag;
pub mod ground_truth;
pub mod report_writer;
pub mod source;

pub use ground_truth::{GroundTruthCsv, read_ground_truth};
pub use report_writer::{
    ReportFiles, ReportWriter, report_stem, write_error_csv, write_graph_csv, write_text_report,
};
pub use source::{BagOdometrySource, TrajectorySource};
