//! odom-eval - Ground-truth vs. logged odometry trajectory evaluation
//!
//! Compares a reference trajectory against an odometry log, sample by
//! sample, and reports position and heading error, summary statistics and
//! z-score outliers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  main, bin/                         │  ← Executables
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Infrastructure
//! │      (ground truth CSV, bag, report writers)        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  evaluation/                        │  ← Pipeline
//! │    (alignment, error series, statistics, report)    │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                (types, math)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```bash
//! odom-eval ground_truth.csv run_03.bag
//! odom-eval --config odom-eval.toml --output reports ground_truth.csv run_03.bag
//! ```

// Layer 1: Core foundation (no internal deps)
pub mod core;

// Layer 2: Evaluation pipeline (depends on core)
pub mod evaluation;

// Layer 3: I/O infrastructure (depends on core, evaluation)
pub mod io;

pub mod config;
pub mod error;

pub use config::{EvalConfig, OutputConfig};
pub use crate::core::types::{PoseSample, Stamp, Trajectory};
pub use error::{EvalError, Result};
pub use evaluation::{EvaluationConfig, EvaluationReport, evaluate};
pub use io::bag::{BagPlayer, BagRecorder};
pub use io::{BagOdometrySource, GroundTruthCsv, ReportWriter, TrajectorySource};
