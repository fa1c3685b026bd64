//! # Gizmo Demo
//!
//! Drives the gizmo library against the headless host for a fixed number
//! of ticks: a spinning wire box and an orbiting arrow are persistent
//! objects, while a point trail and a frame counter are drawn one-shot
//! every tick.

use std::path::PathBuf;

use clap::Parser;
use redlilium_core::math::{transform_from_position_rotation, Rotation, Vec3};
use redlilium_gizmo::{
    ArrowShape, Color3, GizmoConfig, GizmoError, Gizmos, HeadlessHost, StyleOverride,
    WireBoxShape,
};

/// Headless gizmo demo.
#[derive(Parser, Debug)]
#[command(name = "gizmo_demo", about = "Run RedLilium gizmos against a headless host", version)]
struct Args {
    /// Number of ticks to simulate.
    #[arg(long, default_value = "120")]
    ticks: u64,

    /// Optional gizmo configuration (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), GizmoError> {
    let config = match &args.config {
        Some(path) => GizmoConfig::load(path)?,
        None => GizmoConfig::default(),
    };

    let mut gizmos = Gizmos::new(HeadlessHost::new(), config)?;
    gizmos.enable();

    let spinner = gizmos.create_with_style(
        &StyleOverride::new()
            .with_color(Color3::YELLOW)
            .with_always_on_top(false),
        WireBoxShape {
            transform: transform_from_position_rotation(Vec3::zeros(), Rotation::identity()),
            size: Vec3::new(2.0, 2.0, 2.0),
        },
    );
    spinner.enable();

    let orbit = gizmos.create_with_style(
        &StyleOverride::new().with_color(Color3::RED),
        ArrowShape {
            from: Vec3::zeros(),
            to: Vec3::x() * 3.0,
        },
    );
    orbit.enable();

    for tick in 0..args.ticks {
        let angle = tick as f32 * 0.05;
        let rotation = Rotation::from_axis_angle(&Vec3::y_axis(), angle);

        spinner.update(WireBoxShape {
            transform: transform_from_position_rotation(Vec3::zeros(), rotation),
            size: Vec3::new(2.0, 2.0, 2.0),
        });
        orbit.update(ArrowShape {
            from: Vec3::zeros(),
            to: rotation * (Vec3::x() * 3.0),
        });

        for step in 0..4 {
            let t = angle - step as f32 * 0.1;
            gizmos.draw_point(Vec3::new(t.cos() * 4.0, 0.5, t.sin() * 4.0))?;
        }
        gizmos.draw_text(Vec3::new(0.0, 3.0, 0.0), "tick {}", &[&tick])?;

        // Hide the arrow for the second half of the run.
        if tick == args.ticks / 2 {
            orbit.disable();
        }

        gizmos.tick()?;

        if tick % 30 == 0 {
            let stats = gizmos.stats();
            log::info!(
                "tick {tick}: {} created, {} in flight, {} free, {} deferred",
                stats.created,
                stats.in_flight,
                stats.free,
                stats.deferred
            );
        }
    }

    gizmos.disable();
    let stats = gizmos.stats();
    log::info!(
        "Done: {} objects created over {} ticks, {} visible after disable",
        stats.created,
        args.ticks,
        gizmos.host().visible_handles().len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting RedLilium Gizmo Demo");
    log::info!("Demos version: {}", redlilium_demos::VERSION);
    log::info!("Gizmo version: {}", redlilium_gizmo::VERSION);

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("Gizmo demo failed: {e}");
        std::process::exit(1);
    }
}
