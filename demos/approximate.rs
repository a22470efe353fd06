//! Approximates the reference curves with biarcs and prints the arcs.
//!
//! Usage:
//! ```text
//! cargo run --example approximate              # tolerance 1.0
//! cargo run --example approximate -- 0.05     # custom tolerance
//! RUST_LOG=biarc=debug cargo run --example approximate
//! ```

use biarc::operations::approximate::{approx_cubic_bezier, to_pline};
use biarc::samples::sample_curves;

fn main() {
    // Default: WARN for everything, INFO for biarc.
    // Override with RUST_LOG env var (e.g. RUST_LOG=biarc=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("biarc=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let tolerance = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<f64>() {
            Ok(value) => value,
            Err(err) => {
                eprintln!("invalid tolerance {arg:?}: {err}");
                std::process::exit(2);
            }
        },
        None => 1.0,
    };

    for sample in sample_curves() {
        let approximation = match approx_cubic_bezier(&sample.bezier, tolerance) {
            Ok(approximation) => approximation,
            Err(err) => {
                eprintln!("{}: {err}", sample.label);
                continue;
            }
        };

        let pline = to_pline(&approximation);
        println!(
            "{} ({} biarcs, {} polyline segments, {} points when flattened to {tolerance})",
            sample.label,
            approximation.len(),
            pline.segment_count(),
            pline.to_points(tolerance).len()
        );
        for approx in &approximation {
            for arc in approx.biarc.arcs() {
                if arc.is_degenerate() {
                    continue;
                }
                let c = arc.center();
                println!(
                    "  center ({:.3}, {:.3})  r {:.3}  start {:.4}  sweep {:.4}",
                    c.x,
                    c.y,
                    arc.radius(),
                    arc.start_angle(),
                    arc.sweep_angle()
                );
            }
        }
    }
}
