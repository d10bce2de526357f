//! odom-eval - compare an odometry log against ground truth.
//!
//! # Usage
//!
//! ```bash
//! # With default config
//! odom-eval ground_truth.csv run_03.bag
//!
//! # With custom config file
//! odom-eval --config odom-eval.toml ground_truth.csv run_03.bag
//!
//! # With command line overrides
//! odom-eval --search-radius 5 --z-threshold 2.5 --output reports ground_truth.csv run_03.bag
//! ```

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use odom_eval::{
    BagOdometrySource, EvalConfig, GroundTruthCsv, ReportWriter, TrajectorySource, evaluate,
    io::write_text_report,
};

#[derive(Parser, Debug)]
#[command(name = "odom-eval")]
#[command(about = "Evaluate logged odometry against a ground-truth trajectory")]
struct Args {
    /// Ground-truth CSV (secs,nsecs,x,y,yaw)
    ground_truth: PathBuf,

    /// Odometry bag file
    log: PathBuf,

    /// Config file (default: odom-eval.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the CSV reports
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Neighbourhood searched around a timestamp match for a usable sample
    #[arg(long)]
    search_radius: Option<usize>,

    /// Absolute z-score above which an error is an outlier
    #[arg(long)]
    z_threshold: Option<f64>,

    /// Skip writing the CSV reports
    #[arg(long)]
    no_csv: bool,

    /// Leave the per-sample listing out of the printed report
    #[arg(long)]
    summary_only: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> odom_eval::Result<EvalConfig> {
    let mut config = EvalConfig::load(args.config.as_deref())?;

    if let Some(radius) = args.search_radius {
        config.alignment.search_radius = radius;
    }
    if let Some(threshold) = args.z_threshold {
        config.statistics.z_score_threshold = threshold;
    }
    if let Some(ref dir) = args.output {
        config.output.directory = dir.clone();
    }
    if args.no_csv {
        config.output.write_csv = false;
    }
    if args.summary_only {
        config.output.print_entries = false;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;

    log::info!("odom-eval starting");
    log::info!("  Ground truth: {}", args.ground_truth.display());
    log::info!("  Log: {}", args.log.display());
    log::info!(
        "  Search radius: {}, z threshold: {}",
        config.alignment.search_radius,
        config.statistics.z_score_threshold
    );

    let reference = GroundTruthCsv::new(&args.ground_truth).load()?;
    let logged = BagOdometrySource::new(&args.log).load()?;

    let report = evaluate(&reference, &logged, &config.evaluation())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_text_report(&mut out, &report, config.output.print_entries)?;
    out.flush()?;

    if config.output.write_csv {
        ReportWriter::for_log(&config.output.directory, &args.log).write(&report)?;
    }

    Ok(())
}
