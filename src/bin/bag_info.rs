//! CLI tool for inspecting odometry bag files.
//!
//! # Usage
//!
//! ```bash
//! bag_info run_03.bag
//! bag_info --count run_03.bag
//! bag_info --verbose run_03.bag
//! ```

use std::path::PathBuf;

use clap::Parser;

use odom_eval::BagPlayer;
use odom_eval::core::types::Stamp;
use odom_eval::io::bag::BagMessage;

#[derive(Parser, Debug)]
#[command(name = "bag_info")]
#[command(about = "Display information about a bag file")]
struct Args {
    /// Bag file to inspect
    bag: PathBuf,

    /// Show the first few odometry messages (implies --count)
    #[arg(short, long)]
    verbose: bool,

    /// Count actual messages (reads entire file)
    #[arg(short, long)]
    count: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn percent(part: u64, total: u64) -> f64 {
    100.0 * part as f64 / total.max(1) as f64
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut player = BagPlayer::open(&args.bag)?;
    let header = player.header().clone();

    println!("Bag File Information");
    println!("====================");
    println!("File: {}", args.bag.display());
    println!();

    println!("Header Information:");
    println!("  Format version: {}", header.version);
    println!("  Flags: 0x{:04x}", header.flags);
    println!(
        "  Start time: {}",
        Stamp::from_nanos(header.start_time_ns)
    );
    println!("  End time: {}", Stamp::from_nanos(header.end_time_ns));
    println!("  Duration: {:.3} seconds", header.duration_secs());
    println!("  Message count (header): {}", header.message_count);
    println!();

    if args.count || args.verbose {
        println!("Scanning messages...");
        player.rewind()?;

        let mut odometry_count = 0u64;
        let mut twist_count = 0u64;
        let mut first_stamp: Option<Stamp> = None;
        let mut last_stamp = Stamp::default();

        for msg in &mut player {
            let msg = msg?;
            let stamp = msg.stamp();
            if first_stamp.is_none() {
                first_stamp = Some(stamp);
            }
            last_stamp = stamp;

            match msg {
                BagMessage::Odometry(_) => odometry_count += 1,
                BagMessage::Twist(_) => twist_count += 1,
            }
        }

        let total = odometry_count + twist_count;
        println!();
        println!("Message Statistics:");
        println!("  Total messages: {}", total);
        println!(
            "  Odometry: {} ({:.1}%)",
            odometry_count,
            percent(odometry_count, total)
        );
        println!(
            "  Twist: {} ({:.1}%)",
            twist_count,
            percent(twist_count, total)
        );
        if total != header.message_count {
            println!(
                "  Warning: header claims {} messages",
                header.message_count
            );
        }

        let start = first_stamp.unwrap_or_default();
        let duration_secs =
            last_stamp.as_nanos().saturating_sub(start.as_nanos()) as f64 * 1e-9;
        if duration_secs > 0.0 {
            println!();
            println!("Rates:");
            println!("  Overall: {:.1} Hz", total as f64 / duration_secs);
            if odometry_count > 0 {
                println!(
                    "  Odometry: {:.1} Hz",
                    odometry_count as f64 / duration_secs
                );
            }
            if twist_count > 0 {
                println!("  Twist: {:.1} Hz", twist_count as f64 / duration_secs);
            }
        }

        if args.verbose && odometry_count > 0 {
            println!();
            println!("First 5 odometry messages:");
            player.rewind()?;
            for msg in player.odometry_iter().take(5) {
                let msg = msg?;
                println!(
                    "  [{}] x: {:>9.4}, y: {:>9.4}, yaw: {:>7.4}",
                    msg.stamp,
                    msg.x,
                    msg.y,
                    msg.yaw()
                );
            }
        }
    }

    let file_size = std::fs::metadata(&args.bag)?.len();
    println!();
    println!("File Size:");
    println!(
        "  {} bytes ({:.2} KB, {:.2} MB)",
        file_size,
        file_size as f64 / 1024.0,
        file_size as f64 / 1_048_576.0
    );
    if header.message_count > 0 {
        println!(
            "  Average per message: {:.1} bytes",
            file_size as f64 / header.message_count as f64
        );
    }

    Ok(())
}
