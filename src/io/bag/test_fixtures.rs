//! Test fixtures for generating synthetic bag and ground-truth files.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::recorder::BagRecorder;
use super::types::OdometryMsg;
use crate::core::types::{Quaternion, Stamp, Timestamped, Twist2D};

/// One synthetic pose: stamp, x, y, yaw.
pub type FixturePose = (Stamp, f64, f64, f64);

/// Temporary bag file plus matching ground-truth CSV.
///
/// The temporary directory is removed when the fixture is dropped.
pub struct BagTestFixture {
    // Held so the files live as long as the fixture
    _temp_dir: TempDir,
    bag_path: PathBuf,
    ground_truth_path: PathBuf,
}

impl BagTestFixture {
    /// Record `logged` into a bag and `reference` into a ground-truth CSV.
    ///
    /// A twist message is interleaved after every odometry message so
    /// readers have to skip non-odometry records.
    pub fn from_poses(reference: &[FixturePose], logged: &[FixturePose]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let bag_path = temp_dir.path().join("run.bag");
        let ground_truth_path = temp_dir.path().join("ground_truth.csv");

        let mut recorder = BagRecorder::create(&bag_path).expect("Failed to create recorder");
        for &(stamp, x, y, yaw) in logged {
            recorder
                .record_odometry(&OdometryMsg::new(stamp, x, y, Quaternion::from_yaw(yaw)))
                .expect("Failed to record odometry");
            recorder
                .record_twist(&Timestamped::new(Twist2D::new(0.5, 0.0), stamp))
                .expect("Failed to record twist");
        }
        recorder.finish().expect("Failed to finish recording");

        let mut csv = String::from("secs,nsecs,x,y,yaw\n");
        for &(stamp, x, y, yaw) in reference {
            writeln!(csv, "{},{},{},{},{}", stamp.sec, stamp.nsec, x, y, yaw)
                .expect("Failed to format row");
        }
        std::fs::write(&ground_truth_path, csv).expect("Failed to write ground truth");

        Self {
            _temp_dir: temp_dir,
            bag_path,
            ground_truth_path,
        }
    }

    /// Straight-line motion along x at 0.5 m/s, sampled at 10 Hz.
    ///
    /// The log drifts sideways by 1 cm per sample so position errors grow
    /// linearly with the sample index.
    pub fn straight_line(samples: u32) -> Self {
        let reference: Vec<FixturePose> = (0..samples)
            .map(|i| (Stamp::new(100 + i / 10, (i % 10) * 100_000_000), i as f64 * 0.05, 0.0, 0.0))
            .collect();
        let logged: Vec<FixturePose> = reference
            .iter()
            .enumerate()
            .map(|(i, &(stamp, x, _, yaw))| (stamp, x, i as f64 * 0.01, yaw))
            .collect();

        Self::from_poses(&reference, &logged)
    }

    /// Path to the bag file.
    pub fn bag_path(&self) -> &Path {
        &self.bag_path
    }

    /// Path to the ground-truth CSV.
    pub fn ground_truth_path(&self) -> &Path {
        &self.ground_truth_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::bag::BagPlayer;

    #[test]
    fn test_straight_line() {
        let fixture = BagTestFixture::straight_line(30);

        assert!(fixture.bag_path().exists());
        assert!(fixture.ground_truth_path().exists());

        let player = BagPlayer::open(fixture.bag_path()).unwrap();
        assert_eq!(player.message_count(), 60);

        let csv = std::fs::read_to_string(fixture.ground_truth_path()).unwrap();
        assert_eq!(csv.lines().count(), 31);
    }
}
