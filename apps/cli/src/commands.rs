//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use relink_shared::{
    AppConfig, LabelPolicy, RewritePolicy, init_config, load_config, validate_base_url,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// relink — rebase relative markdown links onto an absolute docs-site URL.
#[derive(Parser)]
#[command(
    name = "relink",
    version,
    about = "Rewrite relative markdown links into absolute URLs under a base.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Rewrite links in a markdown file, printing the result to stdout.
    Rewrite {
        /// Path to the UTF-8 markdown document.
        input: PathBuf,

        /// Base URL to prepend (overrides defaults.base_url from config).
        #[arg(short, long)]
        base_url: Option<String>,

        /// Label character policy: any (default) or strict.
        #[arg(short, long)]
        label_policy: Option<String>,

        /// Rewrite the file in place instead of printing to stdout.
        #[arg(long)]
        write: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr: stdout belongs to the rewritten document.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "relink=info",
        1 => "relink=debug",
        _ => "relink=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Rewrite {
            input,
            base_url,
            label_policy,
            write,
        } => cmd_rewrite(&input, base_url.as_deref(), label_policy.as_deref(), write),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_rewrite(
    input: &Path,
    base_url: Option<&str>,
    label_policy: Option<&str>,
    write: bool,
) -> Result<()> {
    let config = load_config()?;

    // Resolve the policy: CLI flags override config file values.
    let mut policy = RewritePolicy::from(&config);
    if let Some(base) = base_url {
        policy.base_url = base.to_string();
    }
    if let Some(labels) = label_policy {
        policy.label_policy = labels.parse::<LabelPolicy>()?;
    }

    // Reject missing/malformed base URL before the rewriter runs.
    validate_base_url(&policy.base_url)?;

    let document = std::fs::read_to_string(input)
        .map_err(|e| eyre!("cannot read '{}': {e}", input.display()))?;

    info!(
        input = %input.display(),
        base_url = %policy.base_url,
        label_policy = %policy.label_policy,
        "rewriting markdown links"
    );

    let result = relink_rewriter::rewrite(&document, &policy);

    if write {
        std::fs::write(input, &result.output)
            .map_err(|e| eyre!("cannot write '{}': {e}", input.display()))?;

        println!();
        println!("  Links rebased in place!");
        println!("  File:      {}", input.display());
        println!("  Rewritten: {}", result.links_rewritten);
        println!("  Preserved: {}", result.links_preserved);
        println!();
    } else {
        info!(
            rewritten = result.links_rewritten,
            preserved = result.links_preserved,
            "writing result to stdout"
        );
        print!("{}", result.output);
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
