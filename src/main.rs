use std::path::PathBuf;

use clap::Parser;
use hoop_trajectory::core::config::{ANGLE_RATE_SLIDER, FrameInput, SCALE_SLIDER, SceneConfig};
use hoop_trajectory::core::export::{default_snapshot_path, write_snapshot};
use hoop_trajectory::core::frame::{Frame, format_readout, render_frame};

/// Solve one hoop shot and print what the interactive view would show.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// pointer x position on the 640 px canvas (clamped short of the hoop)
    #[arg(short, long, default_value_t = 220.0, allow_negative_numbers = true)]
    pointer_x: f64,
    /// pixels per metre, 10..=1000 in steps of 10
    #[arg(short, long, default_value_t = SCALE_SLIDER.default)]
    scale: f64,
    /// how fast the launch angle drops with distance, 0.25..=1.5
    #[arg(short, long, default_value_t = ANGLE_RATE_SLIDER.default)]
    rate: f64,
    /// also render the frame to an image (.svg, .png, .bmp, .jpg); defaults to a timestamped svg
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    snapshot: Option<Option<PathBuf>>,
}

fn report_lines(frame: &Frame) -> Vec<String> {
    let readouts = &frame.readouts;
    let mut lines: Vec<String> = readouts.lines().into_iter().collect();
    lines.push(readouts.scale_label());
    lines.push(readouts.angle_rate_label());
    lines.push(String::new());
    lines.push(format!(
        "Robot at x={} px, trajectory: {} ({} points)",
        format_readout(readouts.shooter.x, 1),
        if readouts.straight_shot {
            "straight line"
        } else {
            "parabola"
        },
        readouts.trajectory_points
    ));
    if let Some(err) = readouts.aim_error {
        lines.push(format!("Warning: {err}"));
    }
    lines
}

/// Renders the frame described by `args`, writing the snapshot when asked for one.
fn solve(args: &Args) -> Result<Frame, String> {
    let input = FrameInput::from_sliders(args.pointer_x, args.scale, args.rate);
    if input.scale != args.scale || input.angle_rate != args.rate {
        log::warn!(
            "slider values snapped to scale={} rate={}",
            input.scale,
            input.angle_rate
        );
    }

    let scene = SceneConfig::default();
    let frame = render_frame(&input, &scene);

    if let Some(target) = &args.snapshot {
        let path = target.clone().unwrap_or_else(default_snapshot_path);
        write_snapshot(&frame, &scene, &path)
            .map_err(|e| format!("Could not write snapshot '{}': {e}", path.display()))?;
        log::info!("snapshot written to {}", path.display());
    }

    Ok(frame)
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let frame = solve(&args)?;
    for line in report_lines(&frame) {
        println!("{line}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
