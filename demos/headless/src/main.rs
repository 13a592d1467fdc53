//! headless: drives a flock with a synthetic 60 Hz frame scheduler.
//!
//! Stands in for a browser render loop: timestamps advance by one frame
//! period, the goal jumps every five seconds, and a simulated "tab hidden"
//! window pauses the flock for two seconds to exercise the resume path.
//!
//! ```text
//! RUST_LOG=info cargo run -p headless [-- path/to/flock.json]
//! ```
//!
//! The optional JSON file is a serialised `FlockConfig`; missing fields take
//! their defaults.

mod goal;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use boids_core::{FlockConfig, FlockRng};
use boids_sim::{Diagnostics, Flock, FlockObserver, FlockStore};

use goal::GoalSchedule;

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_RATE:         f64 = 60.0;
const SIM_SECONDS:        f64 = 20.0;
const GOAL_INTERVAL_SECS: f64 = 5.0;
const CANVAS_WIDTH:       f64 = 1200.0;
const CANVAS_HEIGHT:      f64 = 800.0;
const HIDDEN_FROM_SECS:   f64 = 8.0;
const HIDDEN_UNTIL_SECS:  f64 = 10.0;
const REPORT_EVERY:       u64 = 120;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the frame rate and the tracked agent's forces every `every` frames.
struct FrameReporter {
    every:   u64,
    skipped: u64,
}

impl FlockObserver for FrameReporter {
    fn on_frame_end(&mut self, frame: u64, dt: f64, store: &FlockStore, diagnostics: &Diagnostics) {
        if frame % self.every != 0 {
            return;
        }
        let rate = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        info!("frame {frame}: {rate:.2} fps, {} agents", store.count);
        let f = &diagnostics.forces;
        debug!(
            "agent {}: repel {} heading {} centroid {} goal {}",
            diagnostics.agent, f.repel, f.heading, f.centroid, f.goal
        );
    }

    fn on_paused_step(&mut self, _timestamp: f64) {
        self.skipped += 1;
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<FlockConfig> {
    let Some(path) = path else {
        return Ok(FlockConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;

    println!("=== headless - boids flocking core ===");
    println!(
        "Agents: {}  |  Seconds: {SIM_SECONDS}  |  Frame rate: {FRAME_RATE} Hz",
        config.agent_count
    );
    println!();

    let mut flock = Flock::from_config(config)?;
    let mut goals = GoalSchedule::new(
        FlockRng::new(flock.seed()).child(1),
        GOAL_INTERVAL_SECS,
        CANVAS_WIDTH / 3.0,
        CANVAS_HEIGHT / 3.0,
    );
    let mut reporter = FrameReporter { every: REPORT_EVERY, skipped: 0 };

    let period = 1.0 / FRAME_RATE;
    let total_frames = (SIM_SECONDS * FRAME_RATE).round() as u64;
    let started = Instant::now();

    for n in 0..=total_frames {
        let now = n as f64 * period;

        if let Some(goal) = goals.poll(now) {
            info!("goal moved to {goal}");
            flock.set_goal(goal);
        }

        let hidden = (HIDDEN_FROM_SECS..HIDDEN_UNTIL_SECS).contains(&now);
        flock.set_visible(!hidden);

        flock.step_observed(now, &mut reporter);
    }

    let elapsed = started.elapsed();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "Frames: {}  |  Simulated: {:.2} s  |  Skipped while hidden: {}",
        flock.frame(),
        flock.elapsed(),
        reporter.skipped
    );
    println!("Seed: {}  |  Goal: {}", flock.seed(), flock.goal());
    println!();

    println!("{:<8} {:<24} {:<10} {:<10}", "Agent", "Position", "Speed", "Heading");
    println!("{}", "-".repeat(54));
    for (i, (p, v)) in flock.positions().iter().zip(flock.velocities()).take(8).enumerate() {
        println!(
            "{:<8} {:<24} {:<10.2} {:<10.3}",
            i,
            p.to_string(),
            v.magnitude(),
            flock.heading_angle(i).unwrap_or_default()
        );
    }

    let d = flock.diagnostics();
    println!();
    println!("Tracked agent {} (frame {}):", d.agent, d.frame);
    println!("  repel    {}", d.forces.repel);
    println!("  heading  {}", d.forces.heading);
    println!("  centroid {}", d.forces.centroid);
    println!("  goal     {}", d.forces.goal);
    println!("  field of view radius {}", flock.neighbour_radius());

    Ok(())
}
