use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tree_reprint::config::{load_from_path, ReprintConfig};
use tree_reprint::directive::Kind;
use tree_reprint::ts::{annotate, rename, validate_reprint, RustParser};
use tree_reprint::write::{write_reprinted, WriteResult};
use tree_reprint::Reprinter;

#[derive(Parser)]
#[command(name = "reprint")]
#[command(about = "Format-preserving refactoring for Rust source", long_about = None)]
#[command(version)]
struct Cli {
    /// Reprint settings (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename every identifier spelled exactly like --from
    Rename {
        /// Rust source file to reprint
        file: PathBuf,

        /// Identifier to replace
        #[arg(long)]
        from: String,

        /// New identifier
        #[arg(long)]
        to: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Insert text before (or after) a named item
    Annotate {
        /// Rust source file to reprint
        file: PathBuf,

        /// Tree-sitter item kind, e.g. function_item or struct_item
        #[arg(long)]
        item: String,

        /// Name of the item to annotate
        #[arg(long)]
        name: String,

        /// Text to insert; \n and \t escapes are expanded
        #[arg(long)]
        text: String,

        /// Insert after the item instead of before it
        #[arg(long)]
        after: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Show a line diff of the changes
    #[arg(short, long)]
    diff: bool,

    /// Write the result back to the file
    #[arg(short, long)]
    write: bool,

    /// Skip re-parsing the result for syntax errors
    #[arg(long)]
    no_validate: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_from_path(path)?,
        None => ReprintConfig::default(),
    };
    debug!(?config, "loaded reprint config");
    let reprinter = Reprinter::new(config);

    match cli.command {
        Commands::Rename {
            file,
            from,
            to,
            output,
        } => cmd_rename(&reprinter, &file, &from, &to, &output),

        Commands::Annotate {
            file,
            item,
            name,
            text,
            after,
            output,
        } => {
            let kind = if after { Kind::After } else { Kind::Before };
            cmd_annotate(&reprinter, &file, &item, &name, &unescape(&text), kind, &output)
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tree_reprint=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn cmd_rename(
    reprinter: &Reprinter,
    file: &Path,
    from: &str,
    to: &str,
    output: &OutputArgs,
) -> Result<()> {
    syn::parse_str::<syn::Ident>(from)
        .map_err(|e| anyhow::anyhow!("--from is not a Rust identifier ({from}): {e}"))?;
    syn::parse_str::<syn::Ident>(to)
        .map_err(|e| anyhow::anyhow!("--to is not a Rust identifier ({to}): {e}"))?;

    let source = read_source(file)?;
    let tree = parse(&source)?;
    let reprinted = reprinter.try_reprint(rename(&source, from, to), tree.root_node(), &source)?;
    finish(file, &source, &reprinted, output)
}

fn cmd_annotate(
    reprinter: &Reprinter,
    file: &Path,
    item: &str,
    name: &str,
    text: &str,
    kind: Kind,
    output: &OutputArgs,
) -> Result<()> {
    let source = read_source(file)?;
    let tree = parse(&source)?;
    let query = annotate(&source, item, name, text, kind);
    let reprinted = reprinter.try_reprint(query, tree.root_node(), &source)?;
    finish(file, &source, &reprinted, output)
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn parse(source: &str) -> Result<tree_sitter::Tree> {
    let mut parser = RustParser::new()?;
    Ok(parser.parse(source)?)
}

fn finish(file: &Path, original: &str, reprinted: &str, output: &OutputArgs) -> Result<()> {
    if !output.no_validate {
        validate_reprint(original, reprinted)
            .with_context(|| format!("reprinted {} does not parse", file.display()))?;
    }

    if output.diff {
        display_diff(file, original, reprinted);
    }

    if output.write {
        match write_reprinted(file, reprinted)? {
            WriteResult::Written { file, bytes } => {
                info!(file = %file.display(), bytes, "wrote reprinted source");
                eprintln!("{} {}", "✓".green(), file.display());
            }
            WriteResult::Unchanged { file } => {
                eprintln!("{} {} (unchanged)", "⊙".yellow(), file.display());
            }
        }
    } else if !output.diff {
        print!("{reprinted}");
    }

    Ok(())
}

/// Helper: Show unified diff between original and reprinted content
fn display_diff(file: &Path, original: &str, reprinted: &str) {
    println!("{}", format!("--- {} (original)", file.display()).dimmed());
    println!("{}", format!("+++ {} (reprinted)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, reprinted);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}

/// Expand `\n`, `\t` and `\\` in command-line text.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
