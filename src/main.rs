use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use identok::cli::output::{self, OutputFormat, Tokens, TokenizedIdentifier};
use identok::config::Overrides;
use identok::{dict, Config, DictionarySet, IdentifierTokenizer, SplitMode};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "identok")]
#[command(version, about = "Split program identifiers into words", long_about = None)]
struct Cli {
    /// Identifiers to tokenize
    #[arg(value_name = "IDENTIFIERS")]
    identifiers: Vec<String>,

    /// Read identifiers from a file, one per line ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Split on separators and case changes only
    #[arg(long)]
    naive: bool,

    /// Show the word lists that recognise each token
    #[arg(long)]
    tagged: bool,

    /// Segment every unrecognised word
    #[arg(long, conflicts_with = "conservative")]
    aggressive: bool,

    /// Segment only identifiers left as a single word
    #[arg(long)]
    conservative: bool,

    /// Separator characters (e.g. "_$"; empty disables)
    #[arg(short, long)]
    separators: Option<String>,

    /// Learn tokens at least this long into the project vocabulary (negative disables)
    #[arg(long, allow_hyphen_values = true)]
    vocabulary_threshold: Option<i32>,

    /// Rejoin detached prefixes such as "sub" with the following token
    #[arg(long, conflicts_with = "tagged")]
    concatenate_prefixes: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Compile a text word list into an installed dictionary
    Build {
        /// Word list, one word per line
        wordlist: PathBuf,
        /// Dictionary name (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Show dictionary info
    Info {
        /// Dictionary name
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "identok", &mut io::stdout());
        return Ok(());
    }

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let mut identifiers = cli.identifiers.clone();
    if let Some(path) = &cli.file {
        identifiers.extend(read_identifiers(path)?);
    }
    if identifiers.is_empty() {
        anyhow::bail!("No identifiers specified. Use --help for usage information.");
    }

    let mode = if cli.aggressive {
        Some(SplitMode::Aggressive)
    } else if cli.conservative {
        Some(SplitMode::Conservative)
    } else {
        None
    };

    let config = Config::load(Overrides {
        separators: cli.separators.clone(),
        mode,
        vocabulary_threshold: cli.vocabulary_threshold,
    })?;

    let dictionaries = DictionarySet::from_config(&config)?;
    let tokenizer = IdentifierTokenizer::new(Arc::new(dictionaries), config.tokenizer_options());

    let results = tokenize(&tokenizer, &identifiers, &cli);
    output::print_results(&results, !cli.no_color, cli.format)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn tokenize(
    tokenizer: &IdentifierTokenizer,
    identifiers: &[String],
    cli: &Cli,
) -> Vec<TokenizedIdentifier> {
    let tokens: Vec<Tokens> = match (cli.naive, cli.tagged) {
        (true, true) => identifiers
            .iter()
            .map(|identifier| Tokens::Tagged(tokenizer.naive_tokenize_tagged(identifier)))
            .collect(),
        (true, false) => identifiers
            .iter()
            .map(|identifier| Tokens::Plain(tokenizer.naive_tokenize(identifier)))
            .collect(),
        (false, true) => tokenizer
            .tokenize_all_tagged(identifiers)
            .into_iter()
            .map(Tokens::Tagged)
            .collect(),
        (false, false) => tokenizer
            .tokenize_all(identifiers)
            .into_iter()
            .map(Tokens::Plain)
            .collect(),
    };

    identifiers
        .iter()
        .zip(tokens)
        .map(|(identifier, tokens)| {
            let tokens = match tokens {
                Tokens::Plain(plain) if cli.concatenate_prefixes => {
                    Tokens::Plain(tokenizer.prefix_concatenation(&plain))
                }
                other => other,
            };
            TokenizedIdentifier {
                identifier: identifier.clone(),
                tokens,
            }
        })
        .collect()
}

fn read_identifiers(path: &Path) -> Result<Vec<String>> {
    let lines: Vec<String> = if path == Path::new("-") {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("Failed to read identifiers from stdin")?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?
            .lines()
            .map(str::to_string)
            .collect()
    };

    Ok(lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => {
                dict::manager::list_dictionaries()?;
            }
            DictCommands::Build { wordlist, name } => {
                dict::manager::build_dictionary(&wordlist, name.as_deref())?;
            }
            DictCommands::Info { name } => {
                dict::manager::show_info(&name)?;
            }
        },
    }
    Ok(())
}
