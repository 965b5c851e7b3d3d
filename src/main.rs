use anyhow::{ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use foldbst::BalancedTree;

#[derive(Parser, Debug)]
#[command(
    name = "foldbst",
    about = "Build a count-folding balanced BST from random values and print its level layout"
)]
struct Cli {
    /// Number of random values to insert.
    count: usize,

    /// Inclusive lower bound of generated values.
    #[arg(long, default_value_t = 0)]
    min: i64,

    /// Exclusive upper bound of generated values.
    #[arg(long, default_value_t = 100)]
    max: i64,

    /// RNG seed for reproducible trees.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    ensure!(cli.count > 0, "count must be at least 1");
    ensure!(cli.min < cli.max, "--min must be below --max");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tree = BalancedTree::new();
    for _ in 0..cli.count {
        tree.add_value(rng.gen_range(cli.min..cli.max));
    }

    println!("values: {tree}");
    println!("size: {}  height: {}", tree.size(), tree.height()?);
    println!();

    let matrix = tree.to_level_matrix_with_counts()?;
    print!("{}", render_matrix(&matrix));

    Ok(())
}

/// Lay the string matrix out on a fixed grid.
///
/// Row `i` has `2^i` slots; each entry is centered over the span of leaf
/// cells beneath it, so children line up under their parents.
fn render_matrix(matrix: &[Vec<String>]) -> String {
    let height = matrix.len();
    let cell = matrix
        .iter()
        .flatten()
        .map(|entry| entry.chars().count())
        .max()
        .unwrap_or(1)
        + 2;

    let mut out = String::new();
    for (row, entries) in matrix.iter().enumerate() {
        let span = cell * (1 << (height - 1 - row));
        let mut line = String::new();
        for entry in entries {
            let pad = span.saturating_sub(entry.chars().count());
            let left = pad / 2;
            line.push_str(&" ".repeat(left));
            line.push_str(entry);
            line.push_str(&" ".repeat(pad - left));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
