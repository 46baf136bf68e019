use clap::{Parser, Subcommand};
use log::LevelFilter;
use rres::codec::CompressionType;
use rres::resource::ResourceType;
use rres::trace::TraceLogger;
use rres::{InfoHeader, Resource};
use serde::Serialize;
use std::path::PathBuf;

/// Bytes shown by `show` before eliding.
const PREVIEW_LEN: usize = 32;

#[derive(Parser)]
#[command(name = "rres", about = "Inspect and extract rRES resource containers")]
struct Cli {
    /// Log debug lines (skipped entries, header details)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the file header
    Info {
        input: PathBuf,
    },
    /// List every resource in the container
    List {
        input: PathBuf,
        /// One JSON object per line instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Load a resource and print its descriptor
    Show {
        input: PathBuf,
        /// Resource id; the first resource when omitted
        #[arg(short, long)]
        id: Option<i32>,
    },
    /// Write a resource's decoded payload to a file
    Extract {
        input: PathBuf,
        #[arg(short, long)]
        id: Option<i32>,
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct EntryRow<'a> {
    #[serde(flatten)]
    header: &'a InfoHeader,
    type_name: &'static str,
    compression: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    TraceLogger::init(level)?;

    match cli.command {

        // ── Info ─────────────────────────────────────────────────────────────
        Commands::Info { input } => {
            let header = rres::read_file_header(&input)?;
            println!("── rRES container ───────────────────────────────────────");
            println!("  Path       {}", input.display());
            println!("  Version    {}", header.version);
            println!("  Resources  {}", header.count);
        }

        // ── List ─────────────────────────────────────────────────────────────
        Commands::List { input, json } => {
            let entries = rres::list_entries(&input)?;
            if json {
                for h in &entries {
                    let row = EntryRow {
                        header: h,
                        type_name: type_name(h.data_type),
                        compression: comp_name(h.comp_type),
                    };
                    println!("{}", serde_json::to_string(&row)?);
                }
            } else {
                println!("Container: {}", input.display());
                println!("{:>6} {:<8} {:<8} {:>10} {:>10}  Params",
                         "ID", "Type", "Comp", "Stored", "Size");
                for h in &entries {
                    println!("{:>6} {:<8} {:<8} {:>10} {:>10}  {:?}",
                        h.id, type_name(h.data_type), comp_name(h.comp_type),
                        h.data_size, h.uncomp_size, h.params());
                }
            }
        }

        // ── Show ─────────────────────────────────────────────────────────────
        Commands::Show { input, id } => {
            let mut res = load(&input, id);
            if !res.is_loaded() {
                return Err(format!("no resource loaded from {}", input.display()).into());
            }
            let data = res.data();
            let preview = hex::encode(&data[..data.len().min(PREVIEW_LEN)]);
            println!("  Type     {}", res.resource_type.name());
            println!("  Params   {:?}", res.params());
            println!("  Size     {} B", data.len());
            println!("  Data     {}{}", preview, if data.len() > PREVIEW_LEN { "…" } else { "" });
            res.release();
        }

        // ── Extract ──────────────────────────────────────────────────────────
        Commands::Extract { input, id, output } => {
            let mut res = load(&input, id);
            let data = res.take_data()
                .ok_or_else(|| format!("no resource loaded from {}", input.display()))?;
            std::fs::write(&output, &data)?;
            println!("Extracted {} B → {}", data.len(), output.display());
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn load(path: &PathBuf, id: Option<i32>) -> Resource {
    match id {
        Some(id) => rres::load_by_id(path, id),
        None     => rres::load_first(path),
    }
}

fn type_name(tag: u8) -> &'static str {
    ResourceType::try_from(tag).map(|t| t.name()).unwrap_or("unknown")
}

fn comp_name(tag: u8) -> &'static str {
    CompressionType::try_from(tag).map(|c| c.name()).unwrap_or("unknown")
}
