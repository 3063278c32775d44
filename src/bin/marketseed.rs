//! marketseed CLI - batched SQL seed-script generation from product catalogs
//!
//! Reads the weapon-skin catalog (and optionally a generic item catalog),
//! normalizes everything into one shuffled product pool, and writes one
//! SQL script per (listing variant, batch).

use clap::Parser;
use marketseed::catalog::{load_item_catalog, load_skin_catalog, normalize_items, normalize_skins};
use marketseed::sqlgen::{split_batches, write_batch_script, ALL_VARIANTS};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "marketseed")]
#[command(version, about = "Generate batched SQL seed scripts from product catalogs", long_about = None)]
struct Cli {
    /// Path to the primary weapon-skin catalog (JSON)
    skins: PathBuf,

    /// Optional generic item catalog (JSON, array or keyed)
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Output directory for generated scripts (default: next to the primary catalog)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum products per generated script
    #[arg(long, default_value_t = marketseed::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Maximum rows per bulk INSERT statement
    #[arg(long, default_value_t = marketseed::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("🔧 Loading catalogs...");

    // The primary catalog is required; any failure here aborts the run.
    let skins = load_skin_catalog(&cli.skins)?;
    println!("  ✓ Loaded {} skin entries from {}", skins.len(), cli.skins.display());

    let mut pool = normalize_skins(&skins, &mut rng);
    let ranked_count = pool.len();

    // The secondary catalog is optional; a malformed file is treated the
    // same as an absent one - warn and continue on the primary alone.
    let mut unranked_count = 0;
    match &cli.items {
        Some(path) => match load_item_catalog(path) {
            Ok(items) => {
                println!("  ✓ Loaded {} item entries from {}", items.len(), path.display());
                let mut records = normalize_items(&items, &mut rng);
                unranked_count = records.len();
                pool.append(&mut records);
            }
            Err(e) => {
                println!("  ⚠ Skipping item catalog: {}", e);
            }
        },
        None => {
            println!("  ℹ No item catalog supplied (optional)");
        }
    }

    if pool.is_empty() {
        return Err("No products were produced from the supplied catalogs".to_string());
    }

    println!("  ✓ Normalized {} products total", pool.len());

    pool.shuffle(&mut rng);

    let output_dir = match &cli.output {
        Some(dir) => dir.clone(),
        None => cli
            .skins
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };
    fs::create_dir_all(&output_dir)
        .map_err(|e| format!("Failed to create output directory {}: {}", output_dir.display(), e))?;

    let stem = cli
        .skins
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog");

    println!("🔧 Generating scripts in {}...", output_dir.display());

    // Each variant re-batches the same shuffled pool, so batch N holds
    // the same records for all three variants.
    let mut script_count = 0;
    for variant in ALL_VARIANTS {
        for batch in split_batches(&pool, cli.batch_size) {
            let file_name = format!("{}_{}_batch_{}.sql", stem, variant.id, batch.index);
            let path = output_dir.join(&file_name);

            let file = fs::File::create(&path)
                .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
            let mut writer = BufWriter::new(file);
            write_batch_script(&mut writer, &batch, variant, cli.chunk_size)
                .and_then(|_| writer.flush())
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

            println!("  ✓ {} ({} products)", file_name, batch.records.len());
            script_count += 1;
        }
    }

    println!(
        "✨ Generated {} scripts ({} ranked products, {} unranked products)",
        script_count, ranked_count, unranked_count
    );

    Ok(())
}
