use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poster", about = "Split images into printable poster tiles", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an image into a multi-page PDF of poster tiles
    Split {
        /// Input image (JPEG, PNG, WEBP, or BMP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file (default: input name with a _divided suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Layout pattern id (see `poster patterns`)
        #[arg(long, default_value = poster_tile::DEFAULT_PATTERN_ID)]
        pattern: String,

        /// Resolution for paper sizing
        #[arg(long, default_value = "300")]
        dpi: u32,

        /// Page margin in layout units
        #[arg(long, default_value_t = poster_tile::DEFAULT_UI_MARGIN)]
        margin: f32,

        /// Show the tile layout only, don't generate the PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// List the available layout patterns
    Patterns,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output,
            pattern,
            dpi,
            margin,
            stats_only,
        } => {
            let options = poster_tile::ExportOptions {
                pattern: pattern.clone(),
                dpi,
                margin,
            };

            let resolved = poster_tile::resolve_pattern(&pattern);
            if resolved.id != pattern {
                println!("Unknown pattern '{}', using '{}'", pattern, resolved.id);
            }

            let source = poster_tile::SourceImage::load(&input).await?;
            let stats = poster_tile::calculate_statistics(
                source.width(),
                source.height(),
                resolved,
                dpi,
            )?;
            println!("Split layout:");
            println!("  Pattern: {}", stats.pattern_id);
            println!(
                "  Grid: {} rows x {} cols = {} pages",
                stats.rows, stats.cols, stats.tile_count
            );
            println!(
                "  Tile size: {}x{} px",
                stats.tile_width_px, stats.tile_height_px
            );
            if stats.dropped_right_px > 0 || stats.dropped_bottom_px > 0 {
                println!(
                    "  Dropped edge pixels: {} right, {} bottom",
                    stats.dropped_right_px, stats.dropped_bottom_px
                );
            }

            if stats_only {
                return Ok(());
            }

            let bytes = poster_tile::export_pdf(source, &options).await?;
            let output = output.unwrap_or_else(|| poster_tile::output_path(&input));
            tokio::fs::write(&output, bytes).await?;
            println!("Split → {}", output.display());
        }

        Commands::Patterns => {
            println!("Available patterns (default: {}):", poster_tile::DEFAULT_PATTERN_ID);
            for pattern in poster_tile::all_patterns() {
                println!(
                    "  {:<18} {} rows x {} cols, {} {:?}",
                    pattern.id,
                    pattern.rows,
                    pattern.cols,
                    pattern.paper.name(),
                    pattern.orientation
                );
            }
        }
    }

    Ok(())
}
