//! Classifies pairs of lines and prints how they meet.
//!
//! Usage:
//! ```text
//! cargo run --example intersect                                  # built-in pairs
//! cargo run --example intersect -- "x_1 + x_2 = 1" "x_1 - x_2 = 1"
//! RUST_LOG=geoline=debug cargo run --example intersect           # trace decisions
//! ```

use geoline::{GeolineError, Line, LineIntersection, Vector2};

fn main() -> Result<(), GeolineError> {
    // Default: WARN for everything, INFO for geoline.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoline=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("intersect=info".parse().unwrap_or_default())
        .add_directive("geoline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let pairs = match args.as_slice() {
        [] => builtin_pairs()?,
        [a, b] => vec![(a.parse::<Line>()?, b.parse::<Line>()?)],
        _ => {
            eprintln!("usage: intersect [\"<line>\" \"<line>\"]");
            std::process::exit(2);
        }
    };

    for (l1, l2) in &pairs {
        println!("{l1}  vs  {l2}");
        match l1.intersection_with(l2) {
            Ok(LineIntersection::Disjoint) => println!("  parallel, no intersection"),
            Ok(LineIntersection::Coincident) => {
                println!("  coincident, infinitely many intersections");
            }
            Ok(LineIntersection::Point(p)) => println!("  unique intersection at {p}"),
            Err(e) => println!("  cannot classify: {e}"),
        }
    }
    Ok(())
}

fn builtin_pairs() -> Result<Vec<(Line, Line)>, GeolineError> {
    let diagonal = Line::new(Vector2::new(1, 1), 1)?;
    Ok(vec![
        (diagonal.clone(), Line::new(Vector2::new(1, 1), 2)?),
        (diagonal.clone(), Line::new(Vector2::new(2, 2), 2)?),
        (diagonal.clone(), Line::new(Vector2::new(1, -1), 1)?),
        (diagonal, Line::default()),
    ])
}
