//! mdscribe CLI - render JSON document models to Markdown

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use mdscribe::model::{Document, Element};
use mdscribe::render::{
    self, CodeblockSyntax, Dialect, EmphasisSyntax, HeaderSyntax, ListSyntax, RuleSyntax,
};
use mdscribe::{JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "mdscribe")]
#[command(version)]
#[command(about = "Render JSON document models to Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document to Markdown
    #[command(alias = "md")]
    Render {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        dialect: DialectArgs,

        /// Print render statistics after rendering
        #[arg(long)]
        stats: bool,
    },

    /// Load a JSON document and check every element
    Validate {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show document information and render statistics
    Info {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Normalize a JSON document
    Json {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

/// Dialect selection; flags override the config file.
#[derive(Args, Default)]
struct DialectArgs {
    /// JSON file holding a dialect
    #[arg(long, value_name = "FILE", env = "MDSCRIBE_CONFIG")]
    config: Option<PathBuf>,

    /// Emphasis markers
    #[arg(long, value_enum)]
    emphasis: Option<EmphasisArg>,

    /// Header style
    #[arg(long, value_enum)]
    header: Option<HeaderArg>,

    /// Horizontal rule
    #[arg(long, value_enum)]
    rule: Option<RuleArg>,

    /// Code fence
    #[arg(long, value_enum)]
    codeblock: Option<CodeblockArg>,

    /// Unordered list bullet
    #[arg(long, value_enum)]
    list: Option<ListArg>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EmphasisArg {
    /// **bold**, *italic*
    Asterisks,
    /// __bold__, _italic_
    Underscores,
}

impl From<EmphasisArg> for EmphasisSyntax {
    fn from(arg: EmphasisArg) -> Self {
        match arg {
            EmphasisArg::Asterisks => EmphasisSyntax::Asterisks,
            EmphasisArg::Underscores => EmphasisSyntax::Underscores,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum HeaderArg {
    /// # Title
    Atx,
    /// Title underlined with = or -
    Setext,
}

impl From<HeaderArg> for HeaderSyntax {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Atx => HeaderSyntax::Atx,
            HeaderArg::Setext => HeaderSyntax::Setext,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    /// ***
    Asterisks,
    /// ___
    Underscores,
    /// ---
    Dashes,
}

impl From<RuleArg> for RuleSyntax {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Asterisks => RuleSyntax::Asterisks,
            RuleArg::Underscores => RuleSyntax::Underscores,
            RuleArg::Dashes => RuleSyntax::Dashes,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CodeblockArg {
    /// Backtick fences
    Backticks,
    /// Tilde fences
    Tildes,
}

impl From<CodeblockArg> for CodeblockSyntax {
    fn from(arg: CodeblockArg) -> Self {
        match arg {
            CodeblockArg::Backticks => CodeblockSyntax::Backticks,
            CodeblockArg::Tildes => CodeblockSyntax::Tildes,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ListArg {
    /// * item
    Asterisk,
    /// - item
    Dash,
    /// + item
    Plus,
}

impl From<ListArg> for ListSyntax {
    fn from(arg: ListArg) -> Self {
        match arg {
            ListArg::Asterisk => ListSyntax::Asterisk,
            ListArg::Dash => ListSyntax::Dash,
            ListArg::Plus => ListSyntax::Plus,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            dialect,
            stats,
        } => cmd_render(&input, output.as_deref(), &dialect, stats),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Info { input } => cmd_info(&input),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(input: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let doc = Document::from_json(&json)?;
    log::debug!("Loaded {} sections from {}", doc.len(), input.display());
    Ok(doc)
}

fn build_options(args: &DialectArgs) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut dialect = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
            Dialect::from_json(&json)?
        }
        None => Dialect::default(),
    };

    if let Some(emphasis) = args.emphasis {
        dialect.emphasis = emphasis.into();
    }
    if let Some(header) = args.header {
        dialect.header = header.into();
    }
    if let Some(rule) = args.rule {
        dialect.rule = rule.into();
    }
    if let Some(codeblock) = args.codeblock {
        dialect.codeblock = codeblock.into();
    }
    if let Some(list) = args.list {
        dialect.list = list.into();
    }

    Ok(RenderOptions::new().with_dialect(dialect))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    dialect: &DialectArgs,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let options = build_options(dialect)?;

    if stats {
        let result = render::to_markdown_with_stats(&doc, &options)?;
        write_output(output, &result.content)?;
        eprintln!(
            "{} {} sections, {} tables, {} lists, {} characters",
            "Rendered".green(),
            result.stats.section_count,
            result.stats.table_count,
            result.stats.list_count,
            result.stats.char_count
        );
    } else {
        let markdown = render::to_markdown(&doc, &options)?;
        write_output(output, &markdown)?;
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let elements: usize = doc.sections().iter().map(|s| s.elements().len()).sum();

    println!(
        "{} {} ({} sections, {} top-level elements)",
        "Valid".green().bold(),
        input.display(),
        doc.len(),
        elements
    );
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let locked = doc.sections().iter().filter(|s| s.is_locked()).count();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Sections".bold(), doc.len());
    println!("{}: {}", "Locked sections".bold(), locked);

    let codeblocks = doc
        .sections()
        .iter()
        .flat_map(|s| s.elements())
        .filter(|e| matches!(e, Element::Codeblock(_)))
        .count();
    println!("{}: {}", "Top-level code blocks".bold(), codeblocks);

    println!();
    println!("{}", "Render Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let result = render::to_markdown_with_stats(&doc, &RenderOptions::default())?;
    let stats = &result.stats;
    println!("{}: {}", "Headers".bold(), stats.header_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!(
        "{}: {} ({} entries)",
        "Lists".bold(),
        stats.list_count,
        stats.list_entry_count
    );
    println!("{}: {}", "Code blocks".bold(), stats.codeblock_count);
    println!("{}: {}", "Blockquotes".bold(), stats.blockquote_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Anchors".bold(), stats.anchor_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let mut json = render::to_json(&doc, format)?;
    json.push('\n');
    write_output(output, &json)
}

fn cmd_version() {
    println!("{} {}", "mdscribe".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown generation from typed document models");
    println!();
    println!("License: MIT");
}
