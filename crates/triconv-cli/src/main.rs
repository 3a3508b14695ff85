//! triconv reference CLI: generate coefficient files, multiply them, and
//! run the classic parity demo.

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

mod io;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, Rng as _, SeedableRng};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triconv::multiply;

#[derive(Parser, Debug)]
#[command(
    name = "triconv-cli",
    about = "triconv reference CLI",
    long_about = "triconv reference CLI.\n\nGenerate polynomial coefficient files, multiply them exactly mod 2^64, and run the parity demo.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Generate a deterministic pseudo-random coefficient file (JSON/CBOR).
    Random {
        /// Number of coefficients (>0)
        #[arg(long, default_value_t = 729, value_parser = clap::value_parser!(u64).range(1..))]
        len: u64,

        /// RNG seed; the same seed always yields the same file
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path for the coefficients (JSON/CBOR)
        #[arg(long, default_value = "coeffs.json")]
        out: PathBuf,
    },

    /// Multiply two coefficient files and write the product.
    Multiply {
        /// First factor (JSON/CBOR)
        #[arg(long)]
        p: PathBuf,

        /// Second factor (JSON/CBOR)
        #[arg(long)]
        q: PathBuf,

        /// Output path for the product (JSON/CBOR)
        #[arg(long, default_value = "product.json")]
        out: PathBuf,
    },

    /// Multiply the parity vectors [i mod 2] and [(i+1) mod 2] and print
    /// the product to stdout.
    Demo {
        /// Length of both input vectors (>0)
        #[arg(long, default_value_t = 500_000, value_parser = clap::value_parser!(u64).range(1..))]
        len: u64,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Random { len, seed, out } => random(len as usize, seed, out),
        Cmd::Multiply { p, q, out } => run_multiply(&p, &q, out),
        Cmd::Demo { len } => demo(len as usize),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn random(len: usize, seed: u64, out: PathBuf) -> Result<()> {
    info!(len, seed, "generating coefficients");

    let mut rng = StdRng::seed_from_u64(seed);
    let coeffs: Vec<i64> = (0..len).map(|_| rng.random()).collect();

    io::write_auto(&out, &coeffs)
        .with_context(|| format!("writing coefficients to {}", out.display()))?;

    println!("Generated {len} coefficients (seed {seed}) → {}", out.display());
    Ok(())
}

fn run_multiply(p_path: &PathBuf, q_path: &PathBuf, out: PathBuf) -> Result<()> {
    let p: Vec<i64> = io::read_auto(p_path)
        .with_context(|| format!("reading first factor from {}", p_path.display()))?;
    let q: Vec<i64> = io::read_auto(q_path)
        .with_context(|| format!("reading second factor from {}", q_path.display()))?;

    if p.is_empty() || q.is_empty() {
        bail!("input polynomials must be nonempty");
    }

    info!(p_len = p.len(), q_len = q.len(), "multiplying");
    let start = Instant::now();
    let product = multiply(&p, &q);
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");

    io::write_auto(&out, &product)
        .with_context(|| format!("writing product to {}", out.display()))?;

    println!(
        "Multiplied {} × {} → {} coefficients → {}",
        p.len(),
        q.len(),
        product.len(),
        out.display()
    );
    Ok(())
}

fn demo(len: usize) -> Result<()> {
    let p: Vec<i64> = (0..len as i64).map(|i| i % 2).collect();
    let q: Vec<i64> = (0..len as i64).map(|i| (i + 1) % 2).collect();

    info!(len, "running parity demo");
    let start = Instant::now();
    let product = multiply(&p, &q);
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");

    let stdout = std::io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    for c in &product {
        write!(w, "{c} ")?;
    }
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
