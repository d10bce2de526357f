//! Trajectory sources.
//!
//! Both the reference and the logged trajectory come through
//! [`TrajectorySource`], so the evaluation pipeline never sees file formats.

use std::path::{Path, PathBuf};

use super::bag::BagPlayer;
use super::ground_truth::GroundTruthCsv;
use crate::core::types::Trajectory;
use crate::error::Result;

/// Anything that can produce a time-ordered trajectory.
pub trait TrajectorySource {
    /// Read the full trajectory.
    fn load(&mut self) -> Result<Trajectory>;
}

impl TrajectorySource for GroundTruthCsv {
    fn load(&mut self) -> Result<Trajectory> {
        self.read()
    }
}

/// Odometry samples decoded from a bag file.
///
/// Only odometry messages contribute; other message types are skipped.
#[derive(Debug, Clone)]
pub struct BagOdometrySource {
    path: PathBuf,
}

impl BagOdometrySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrajectorySource for BagOdometrySource {
    fn load(&mut self) -> Result<Trajectory> {
        let mut player = BagPlayer::open(&self.path)?;
        let total = player.message_count();

        let samples = player
            .odometry_iter()
            .map(|msg| msg.map(|m| m.to_pose_sample()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        log::info!(
            "Loaded {} odometry samples from {} ({} messages total)",
            samples.len(),
            self.path.display(),
            total
        );

        let trajectory = Trajectory::new(samples)?;
        let invalid = trajectory.invalid_yaw_count();
        if invalid > 0 {
            log::warn!("{} logged samples have a non-finite yaw", invalid);
        }
        Ok(trajectory)
    }
}
