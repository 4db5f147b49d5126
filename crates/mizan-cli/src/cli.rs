//! Argument parsing and command dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mizan_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging, service_name};
use tracing::debug;

use crate::commands::catalog::handle_catalog_check;
use crate::commands::lang::{handle_lang_list, handle_lang_set, handle_lang_show};
use crate::commands::sanitize::{ProfileArg, handle_sanitize};
use crate::commands::translate::handle_translate;
use crate::context::{AppContext, CliError, CliResult};
use crate::output::OutputFormat;

const DEFAULT_PREFS_PATH: &str = "./.mizan/preferences.json";

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&logging_config(&cli)) {
        eprintln!("warning: {err:#}");
    }

    let mut stdout = io::stdout().lock();
    match dispatch(cli, &mut stdout) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

/// Service name every CLI log event carries.
const SERVICE: &str = "mizan-cli";

fn logging_config(cli: &Cli) -> LoggingConfig<'_> {
    LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        service: SERVICE,
    }
}

fn dispatch(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    let ctx = AppContext {
        prefs_path: cli.prefs,
        output: cli.output,
    };
    debug!(
        service = service_name(),
        command = command_label(&cli.command),
        prefs = %ctx.prefs_path.display(),
        "dispatching"
    );

    match cli.command {
        Command::Lang(lang) => match lang {
            LangCommand::Show => handle_lang_show(&ctx, out),
            LangCommand::List => handle_lang_list(&ctx, out),
            LangCommand::Set(args) => handle_lang_set(&ctx, &args.code, out),
        },
        Command::Translate(args) => {
            if args.keys.is_empty() {
                return Err(CliError::validation("at least one key is required"));
            }
            handle_translate(&ctx, &args.keys, args.lang.as_deref(), out)
        }
        Command::Catalog(catalog) => match catalog {
            CatalogCommand::Check(args) => handle_catalog_check(&ctx, args.dir.as_deref(), out),
        },
        Command::Sanitize(args) => handle_sanitize(&ctx, &args.text, args.profile, out),
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Lang(LangCommand::Show) => "lang_show",
        Command::Lang(LangCommand::List) => "lang_list",
        Command::Lang(LangCommand::Set(_)) => "lang_set",
        Command::Translate(_) => "translate",
        Command::Catalog(CatalogCommand::Check(_)) => "catalog_check",
        Command::Sanitize(_) => "sanitize",
    }
}

#[derive(Parser)]
#[command(name = "mizan", about = "Localization and form tooling for the Mizan site")]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "MIZAN_PREFS_PATH",
        default_value = DEFAULT_PREFS_PATH,
        help = "Preference file holding the selected language"
    )]
    prefs: PathBuf,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[arg(long, global = true, env = "MIZAN_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[arg(long, global = true, env = "MIZAN_LOG_FORMAT")]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(subcommand)]
    Lang(LangCommand),
    Translate(TranslateArgs),
    #[command(subcommand)]
    Catalog(CatalogCommand),
    Sanitize(SanitizeArgs),
}

#[derive(Subcommand)]
enum LangCommand {
    /// Print the active language.
    Show,
    /// List supported languages.
    List,
    /// Change and persist the active language.
    Set(LangSetArgs),
}

#[derive(Args)]
struct LangSetArgs {
    /// Language code such as `id`, `en`, or `ar`.
    code: String,
}

#[derive(Args)]
struct TranslateArgs {
    /// Translation keys to resolve.
    keys: Vec<String>,
    /// Resolve against this language instead of the stored preference.
    #[arg(long)]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// Report keys missing from any language table.
    Check(CatalogCheckArgs),
}

#[derive(Args)]
struct CatalogCheckArgs {
    /// Directory of `<code>.json` tables to check instead of the built-in catalog.
    #[arg(long)]
    dir: Option<PathBuf>,
}

#[derive(Args)]
struct SanitizeArgs {
    /// Raw input to clean.
    text: String,
    #[arg(long, value_enum, default_value_t = ProfileArg::FreeText)]
    profile: ProfileArg,
}
