//! Pancyclic demo binary.
//!
//! Builds the 18-vertex sample diagram, prints its chords and crossing
//! components, then describes it and the diagram decoded from its canonical
//! identifier.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: pancyclic=info,pancyclic_demo=info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//! - `DESCRIBE_BITSTRING`: include raw identifier digits (default: on)
//! - `DESCRIBE_CANONICAL`: include canonical identifier digits (default: on)
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=pancyclic=debug cargo run --bin pancyclic_demo
//! ```

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pancyclic::{Chord, DescribeOptions, Hamiltonian};

const SAMPLE_VERTICES: usize = 18;

const SAMPLE_CHORDS: [(i64, i64); 9] = [
    (0, 16),
    (1, 15),
    (2, 4),
    (3, 5),
    (6, 8),
    (7, 9),
    (10, 17),
    (11, 13),
    (12, 14),
];

/// Initialize the tracing subscriber with JSON or pretty format.
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pancyclic=info,pancyclic_demo=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let options = DescribeOptions::from_env();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        include_bitstring = options.include_bitstring,
        include_canonical_bitstring = options.include_canonical_bitstring,
        "Starting pancyclic demo"
    );

    let n = SAMPLE_VERTICES;
    let diagram = Hamiltonian::from_chords(
        n,
        SAMPLE_CHORDS
            .iter()
            .map(|&(start, end)| Chord::new(start, end, n)),
    )?;

    for chord in diagram.chords() {
        println!("{chord}");
    }

    for (idx, component) in diagram.crossing_components().iter().enumerate() {
        println!("Comp num: {}", idx + 1);
        for chord in component.chords() {
            println!("\t{chord}");
        }
    }

    println!();
    println!("Test graph: ");
    println!("{}", diagram.describe(&options));

    let iso_num = diagram.graph_iso_num();
    let iso_graph = Hamiltonian::from_graph_num(n, &iso_num)?;

    println!();
    println!("Iso graph:");
    println!("{}", iso_graph.describe(&options));

    info!(
        num_chords = diagram.num_chords(),
        canonical = %iso_num.fingerprint_hex(),
        "Demo complete"
    );
    Ok(())
}
