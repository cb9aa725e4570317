//! Command-line interface for the chunker.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use textwrap::{fill, Options};

use crate::config::{ChunkerConfig, TEXT_WRAP_WIDTH};
use crate::error::{ChunkerError, Result};
use crate::index::{dedup_by_article_number, to_index_record};
use crate::input::read_extracted_lines;
use crate::output::{render, save_output, ChunkDocument, OutputFormat};
use crate::segmentation::{SegmentEngine, Segmentation};
use crate::types::ArticleChunk;

/// Code pénal chunker - Split the French penal code into indexed articles.
#[derive(Parser)]
#[command(name = "codepenal-chunker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YAML file overriding noise tokens and document labels
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment an extracted text file and write the articles.
    Segment {
        /// UTF-8 text extracted from the penal code PDF
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Keep only the first article for each number
        #[arg(long)]
        dedup: bool,
    },

    /// Print the article numbers found, one per line.
    List {
        /// UTF-8 text extracted from the penal code PDF
        input: PathBuf,

        /// Keep only the first article for each number
        #[arg(long)]
        dedup: bool,
    },

    /// Print the metadata and text of one article.
    Show {
        /// UTF-8 text extracted from the penal code PDF
        input: PathBuf,

        /// Article number (e.g., 131-7)
        article: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => ChunkerConfig::from_yaml_file(path)?,
        None => ChunkerConfig::default(),
    };

    match cli.command {
        Commands::Segment {
            input,
            output,
            format,
            dedup,
        } => segment_command(&config, &input, output.as_deref(), format, dedup),
        Commands::List { input, dedup } => list_command(&config, &input, dedup),
        Commands::Show { input, article } => show_command(&config, &input, &article),
    }
}

/// Read and segment an input file.
fn load_chunks(config: &ChunkerConfig, input: &Path, dedup: bool) -> Result<Segmentation> {
    let lines = read_extracted_lines(input)?;
    let mut segmentation = SegmentEngine::from_config(config).run(&lines);

    if segmentation.chunks.is_empty() {
        tracing::warn!(path = %input.display(), "No article found in input");
    }

    if dedup {
        segmentation.chunks = dedup_by_article_number(segmentation.chunks);
    }
    Ok(segmentation)
}

/// Execute the segment command.
fn segment_command(
    config: &ChunkerConfig,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    dedup: bool,
) -> Result<()> {
    // Validate output location before doing any work
    if let Some(output_file) = output {
        if output_file.is_dir() {
            return Err(ChunkerError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is a directory: {}", output_file.display()),
            )));
        }
    }

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Segmenting articles...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let segmentation = match load_chunks(config, input, dedup) {
        Ok(segmentation) => segmentation,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    let document = ChunkDocument::new(&config.source, &segmentation.chunks);

    let saved = match output {
        Some(output_file) => {
            pb.set_message("Saving articles...");
            match save_output(&document, output_file, format) {
                Ok(path) => Some(path),
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }
        }
        None => None,
    };
    pb.finish_and_clear();

    let stats = segmentation.stats;
    eprintln!(
        "{} {}",
        style("Segmented").bold(),
        style(input.display()).cyan()
    );
    eprintln!("  Lines: {}", stats.lines);
    eprintln!("  Structural headings: {}", stats.markers);
    eprintln!(
        "  Articles: {}",
        style(segmentation.chunks.len()).green()
    );
    if stats.dropped > 0 {
        eprintln!(
            "  Empty articles dropped: {}",
            style(stats.dropped).yellow().bold()
        );
    }
    if segmentation.chunks.is_empty() {
        eprintln!("{}", style("No article found in input").yellow().bold());
    }

    match saved {
        Some(path) => {
            eprintln!();
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render(&document, format)?),
    }

    Ok(())
}

/// Execute the list command.
fn list_command(config: &ChunkerConfig, input: &Path, dedup: bool) -> Result<()> {
    let segmentation = load_chunks(config, input, dedup)?;
    for chunk in &segmentation.chunks {
        println!("{}", chunk.article_number);
    }
    Ok(())
}

/// Execute the show command.
fn show_command(config: &ChunkerConfig, input: &Path, article: &str) -> Result<()> {
    let segmentation = load_chunks(config, input, false)?;
    let chunk = find_article(&segmentation.chunks, article)
        .ok_or_else(|| ChunkerError::ArticleNotFound(article.to_string()))?;

    println!("{} {}", style("Article").bold(), style(&chunk.article_number).cyan());
    let record = to_index_record(chunk, config);
    for (key, value) in record.metadata.iter().filter(|(k, _)| *k != "article_numero") {
        println!("  {}: {}", style(key).dim(), value);
    }
    println!();
    println!("{}", format_body(&chunk.body, TEXT_WRAP_WIDTH));

    Ok(())
}

/// First chunk carrying the given article number.
fn find_article<'a>(chunks: &'a [ArticleChunk], article: &str) -> Option<&'a ArticleChunk> {
    chunks.iter().find(|chunk| chunk.article_number == article.trim())
}

/// Wrap each body line for the terminal, indented under the heading.
fn format_body(body: &str, width: usize) -> String {
    let options = Options::new(width)
        .initial_indent("  ")
        .subsequent_indent("  ");
    body.lines()
        .map(|line| fill(line, &options))
        .collect::<Vec<_>>()
        .join("\n")
}
