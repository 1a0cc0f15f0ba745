//! # tgprettify CLI
//!
//! Command-line front end for the tgprettify library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tgprettify::cli::Args;
use tgprettify::config::load_preset;
use tgprettify::core::{FilterConfig, process};
use tgprettify::format::{default_file_stem, export_path, write_to_format};
use tgprettify::{PrettifyError, parser};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs the log subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tgprettify={}", args.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), PrettifyError> {
    let total_start = Instant::now();

    let base = match &args.config {
        Some(path) => load_preset(path)?,
        None => FilterConfig::new(),
    };
    let config = args.filter_config(base);
    debug!(?config, "effective filter configuration");

    println!("📦 tgprettify v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("📄 Format:  {}", args.format);
    if let Some(preset) = &args.config {
        println!("⚙️  Preset:  {}", preset.display());
    }
    if !config.keywords.is_empty() {
        println!(
            "🔍 Keywords: {}",
            config.keywords.iter().collect::<Vec<_>>().join(", ")
        );
    }
    if config.start_offset > 0 {
        println!("⏭️  Offset:  {}", config.start_offset);
    }
    println!();

    println!("⏳ Loading export...");
    let parse_start = Instant::now();
    let doc = parser::parse(&args.input)?;
    println!(
        "   Found {} messages ({:.2}s)",
        doc.len(),
        parse_start.elapsed().as_secs_f64()
    );

    let result = process(&doc, &config);
    info!(
        forwarded = result.stats.forwarded,
        empty = result.stats.empty,
        keyword = result.stats.keyword,
        offset_skipped = result.stats.offset_skipped,
        "filter summary"
    );

    println!();
    println!("📊 Filtered to {} messages", result.len());
    println!(
        "   Approx. character count: {} (~{} tokens)",
        result.estimate.char_count, result.estimate.approx_tokens
    );

    if args.dry_run {
        println!();
        println!("🧪 Dry run, nothing written");
        return Ok(());
    }

    let stem = match &args.output {
        Some(name) => name.clone(),
        None => default_file_stem(doc.name.as_deref(), &config.keywords),
    };
    let output_config = config.output_config();

    fs::create_dir_all(&args.out_dir)?;

    println!();
    let write_start = Instant::now();
    for &format in args.format.formats() {
        let path = export_path(&args.out_dir, &stem, format);
        println!("💾 Writing {}...", format);
        write_to_format(&result, &path, format, &output_config)?;
        info!(path = %path.display(), %format, "export written");
        println!("   Saved to {}", path.display());
    }
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
