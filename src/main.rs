use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use boardsmith::config::AppConfig;
use boardsmith::export::{self, DirSink, ExportError, FileSink, Format};
use boardsmith::generator::{GenerateError, Generator, Origin};
use boardsmith::history::History;
use boardsmith::miro::{self, MiroClient, MiroError};
use boardsmith::notify::{ConsoleNotifier, Notifier};
use boardsmith::storage::{FileStorage, StorageError};
use boardsmith::suggestions::{self, SUGGESTIONS};
use boardsmith::template::Template;
use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "boardsmith=info";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no suggestion at position {0}; run `boardsmith suggestions`")]
    UnknownSuggestion(usize),
    #[error("template not found in history: {0}")]
    NotFound(String),
    #[error("history is empty")]
    EmptyHistory,
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("history storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("Miro board creation failed: {0}")]
    Miro(#[from] MiroError),
}

#[derive(Parser, Debug)]
#[command(name = "boardsmith", about = "Generate agile facilitation templates for Miro")]
struct Cli {
    /// Override the data directory (history and default export location).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a template from an idea.
    Generate(GenerateArgs),
    /// List the quick suggestions.
    Suggestions,
    History(HistoryCommand),
    /// Write a saved template to a file.
    Export(ExportArgs),
    /// Create a Miro board from a saved template.
    Board(BoardArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(required_unless_present = "suggestion", conflicts_with = "suggestion")]
    idea: Option<String>,

    /// Use the Nth quick suggestion as the idea.
    #[arg(long)]
    suggestion: Option<usize>,

    /// Skip the completion backend and use the built-in templates.
    #[arg(long, default_value_t = false)]
    offline: bool,

    #[arg(long, default_value_t = false)]
    no_save: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Args, Debug)]
struct HistoryCommand {
    #[command(subcommand)]
    command: HistorySubcommand,
}

#[derive(Subcommand, Debug)]
enum HistorySubcommand {
    List,
    Show {
        id: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    Clear,
}

#[derive(Args, Debug)]
struct TemplateRef {
    #[arg(required_unless_present = "latest", conflicts_with = "latest")]
    id: Option<String>,

    /// Use the most recently saved template.
    #[arg(long, default_value_t = false)]
    latest: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    target: TemplateRef,

    #[arg(long, value_enum)]
    format: Format,

    /// Output directory; defaults to `<data dir>/exports`.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BoardArgs {
    #[command(flatten)]
    target: TemplateRef,

    /// Miro access token; overrides `MIRO_TOKEN`.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenv
        && !e.not_found()
    {
        warn!(error = %e, "config: failed to load .env");
    }

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let notifier = ConsoleNotifier::stderr();
    match run(cli.command, &config, &notifier).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            notifier.alert(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &AppConfig, notifier: &dyn Notifier) -> Result<(), CliError> {
    let history = History::new(Arc::new(FileStorage::new(config.state_dir())));

    match command {
        Command::Generate(args) => generate(args, config, &history, notifier).await,
        Command::Suggestions => {
            for (i, s) in SUGGESTIONS.iter().enumerate() {
                println!("{}. {}\n   {}", i + 1, s.title, s.idea);
            }
            Ok(())
        }
        Command::History(cmd) => history_command(cmd.command, &history, notifier),
        Command::Export(args) => {
            let template = resolve(&history, &args.target)?;
            let out = args.out.unwrap_or_else(|| config.export_dir());
            export_to(&DirSink::new(out), &template, args.format, notifier)
        }
        Command::Board(args) => {
            let template = resolve(&history, &args.target)?;
            let token = args
                .token
                .or_else(|| config.miro_token.clone())
                .ok_or(MiroError::MissingToken)?;
            let client = MiroClient::new(&config.miro_base_url, &token)?;
            let board = miro::materialize(&client, &template).await?;
            notifier.info(&format!("Board criado no Miro: {}", template.title));
            println!("{}", board.view_link);
            Ok(())
        }
    }
}

async fn generate(
    args: GenerateArgs,
    config: &AppConfig,
    history: &History,
    notifier: &dyn Notifier,
) -> Result<(), CliError> {
    let idea = match (args.idea, args.suggestion) {
        (Some(idea), _) => idea,
        (None, Some(n)) => suggestions::by_position(n)
            .ok_or(CliError::UnknownSuggestion(n))?
            .idea
            .to_string(),
        (None, None) => String::new(),
    };

    let generator = if args.offline {
        Generator::new(None)
    } else {
        Generator::from_config(config.completion.as_ref())
    };

    let generated = generator.generate(&idea).await?;
    if generated.origin == Origin::Fallback {
        notifier.info("Usando template de exemplo (backend de IA indisponível)");
    }

    println!("{}", export::render(&generated.template, args.format)?);

    if !args.no_save {
        // The template is already printed; a failed save is reported, not fatal.
        match history.save(&generated.template) {
            Ok(()) => notifier.info(&format!("Template salvo no histórico: {}", generated.template.id)),
            Err(e) => notifier.alert(&format!("Falha ao salvar no histórico: {e}")),
        }
    }
    Ok(())
}

fn history_command(command: HistorySubcommand, history: &History, notifier: &dyn Notifier) -> Result<(), CliError> {
    match command {
        HistorySubcommand::List => {
            let templates = history.list();
            if templates.is_empty() {
                notifier.info("Nenhum template no histórico");
            }
            for t in templates {
                println!("{}  {}  {}", t.id, t.created_at, t.title);
            }
        }
        HistorySubcommand::Show { id, format } => {
            let template = history.get(&id).ok_or(CliError::NotFound(id))?;
            println!("{}", export::render(&template, format)?);
        }
        HistorySubcommand::Clear => {
            history.clear()?;
            notifier.info("Histórico limpo");
        }
    }
    Ok(())
}

fn resolve(history: &History, target: &TemplateRef) -> Result<Template, CliError> {
    match &target.id {
        Some(id) => history.get(id).ok_or_else(|| CliError::NotFound(id.clone())),
        None => history.latest().ok_or(CliError::EmptyHistory),
    }
}

/// Write through `sink`; if that fails, alert and print the content instead.
fn export_to(sink: &dyn FileSink, template: &Template, format: Format, notifier: &dyn Notifier) -> Result<(), CliError> {
    let contents = export::render(template, format)?;
    match sink.write(&format.file_name(template), contents.as_bytes()) {
        Ok(path) => notifier.info(&format!("Exportado para {}", path.display())),
        Err(e) => {
            notifier.alert(&format!("{e}; conteúdo exibido abaixo"));
            println!("{contents}");
        }
    }
    Ok(())
}
