//! # `PractRand` Round Stream Generator
//!
//! Streams the output of the keyed round functions applied to an
//! incrementing 64-bit counter block, for statistical testing with
//! `PractRand` or `dieharder`:
//!
//! `roundstream --variant aes10 | RNG_test stdin64`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};

use aez_core::{Block, KeyMaterial, BLOCK_SIZE, KEY_MATERIAL_SIZE};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Variant {
    /// Four rounds (the lightweight mixing permutation)
    Aes4,
    /// Ten rounds (the full-strength permutation)
    Aes10,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Backend {
    /// Whatever kernel the dispatcher selects at startup
    Auto,
    /// Force the pure-Rust kernel
    Portable,
}

#[derive(Parser)]
#[command(name = "roundstream")]
#[command(about = "Round-function stream generator for PractRand", long_about = None)]
#[command(version)]
struct Args {
    /// Round variant to stream
    #[arg(short, long, value_enum, default_value_t = Variant::Aes10)]
    variant: Variant,

    /// Kernel selection
    #[arg(short, long, value_enum, default_value_t = Backend::Auto)]
    backend: Backend,

    /// Key material as 96 hex characters (48 bytes); zero if omitted
    #[arg(short, long)]
    key_material: Option<String>,

    /// Number of 16-byte blocks to emit (0 = unbounded)
    #[arg(short = 'n', long, default_value_t = 0)]
    blocks: u64,
}

/// Selected round function, unified across kernels.
type RoundFn = fn(&mut Block, &KeyMaterial);

fn parse_key_material(hex_str: &str) -> Result<KeyMaterial> {
    let bytes = hex::decode(hex_str).context("key material is not valid hex")?;
    anyhow::ensure!(
        bytes.len() == KEY_MATERIAL_SIZE,
        "key material must be {} bytes, got {}",
        KEY_MATERIAL_SIZE,
        bytes.len()
    );
    let mut keys = [0u8; KEY_MATERIAL_SIZE];
    keys.copy_from_slice(&bytes);
    Ok(keys)
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let keys = match &args.key_material {
        Some(hex_str) => parse_key_material(hex_str)?,
        None => [0u8; KEY_MATERIAL_SIZE],
    };

    let round: RoundFn = match (args.backend, args.variant) {
        (Backend::Auto, Variant::Aes4) => aez_core::aes4,
        (Backend::Auto, Variant::Aes10) => aez_core::aes10,
        (Backend::Portable, Variant::Aes4) => aez_core::kernels::portable::aes4,
        (Backend::Portable, Variant::Aes10) => aez_core::kernels::portable::aes10,
    };

    match args.backend {
        Backend::Auto => eprintln!("backend: {}", aez_core::active_backend()),
        Backend::Portable => eprintln!("backend: Portable (forced)"),
    }

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    let mut counter: u64 = 0;
    loop {
        let mut block = [0u8; BLOCK_SIZE];
        block[..8].copy_from_slice(&counter.to_le_bytes());
        round(&mut block, &keys);

        // A closed pipe ends the stream, not an error
        if handle.write_all(&block).is_err() {
            break;
        }

        counter = counter.wrapping_add(1);
        if args.blocks != 0 && counter == args.blocks {
            break;
        }
    }

    Ok(())
}
