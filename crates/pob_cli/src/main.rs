use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use pob_core::core_api::{
    CoreError, CoreErrorCode, DEFAULT_API_BASE, DEFAULT_USER_AGENT, Engine, ProfileClient,
    ProfileId, Session,
};
use pob_core::share_code;
use pob_render::{DEFAULT_TARGET_VERSION, RenderOptions};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "pob_export=info";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Log debug output from the exporter to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export a character as a Path of Building build.
    Export(ExportArgs),
    /// Print the XML contained in a share code.
    Decode {
        /// Share code, or `-` to read it from stdin.
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Print the share code for a build XML file.
    Encode {
        #[arg(value_name = "BUILD.XML")]
        path: PathBuf,
    },
}

#[derive(Debug, Args)]
struct ExportArgs {
    #[arg(long, env = "POB_ACCOUNT", required_unless_present = "items_json")]
    account: Option<String>,
    #[arg(long, env = "POB_CHARACTER", required_unless_present = "items_json")]
    character: Option<String>,
    /// Saved `get-items` response to use instead of fetching.
    #[arg(long = "items-json", value_name = "PATH", requires = "passives_json")]
    items_json: Option<PathBuf>,
    /// Saved `get-passive-skills` response to use instead of fetching.
    #[arg(long = "passives-json", value_name = "PATH", requires = "items_json")]
    passives_json: Option<PathBuf>,
    /// Write to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Emit a share code instead of XML.
    #[arg(long, conflicts_with = "json")]
    code: bool,
    /// Emit a JSON summary of the export instead of XML.
    #[arg(long)]
    json: bool,
    #[arg(long = "target-version", default_value = DEFAULT_TARGET_VERSION)]
    target_version: String,
    #[arg(long = "user-agent", env = "POB_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    #[arg(long = "api-base", env = "POB_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Export(args) => run_export(args),
        Command::Decode { code } => run_decode(code),
        Command::Encode { path } => run_encode(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pob_export=debug,pob_core=debug,pob_render=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_export(args: &ExportArgs) -> Result<(), CoreError> {
    let session = open_session(args)?;
    let options = RenderOptions {
        target_version: args.target_version.clone(),
    };

    let rendered = if args.json {
        let summary = pob_render::render_summary_json(&session, &options)?;
        serde_json::to_string_pretty(&summary).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Serialization,
                format!("failed to render JSON summary: {e}"),
            )
        })?
    } else if args.code {
        pob_render::render_share_code(&session, &options)?
    } else {
        pob_render::render_xml(&session, &options)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|e| {
                CoreError::new(
                    CoreErrorCode::Io,
                    format!("failed to write {}: {e}", path.display()),
                )
            })?;
            tracing::info!(
                character = %session.snapshot().character_name,
                path = %path.display(),
                "wrote build"
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn open_session(args: &ExportArgs) -> Result<Session, CoreError> {
    let engine = Engine::new();

    if let (Some(items_path), Some(passives_path)) = (&args.items_json, &args.passives_json) {
        tracing::info!(items = %items_path.display(), passives = %passives_path.display(), "converting saved profile");
        let items = read_text(items_path)?;
        let passives = read_text(passives_path)?;
        return engine
            .open_json(&items, &passives)
            .map_err(|e| e.context(items_path.display()));
    }

    let (Some(account), Some(character)) = (&args.account, &args.character) else {
        return Err(CoreError::new(
            CoreErrorCode::Fetch,
            "--account and --character are required unless --items-json is given",
        ));
    };
    let profile = ProfileId::new(account.as_str(), character.as_str());
    tracing::info!(%profile, "fetching profile");

    let client = ProfileClient::with_options(args.api_base.as_str(), &args.user_agent)?;
    engine.open_profile(&client, &profile)
}

fn run_decode(code: &str) -> Result<(), CoreError> {
    let code = if code == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|e| {
            CoreError::new(CoreErrorCode::Io, format!("failed to read stdin: {e}"))
        })?;
        buf
    } else {
        code.to_string()
    };

    println!("{}", share_code::decode_share_code(&code)?);
    Ok(())
}

fn run_encode(path: &Path) -> Result<(), CoreError> {
    let xml = read_text(path)?;
    println!("{}", share_code::encode_share_code(&xml)?);
    Ok(())
}

fn read_text(path: &Path) -> Result<String, CoreError> {
    fs::read_to_string(path).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Io,
            format!("failed to read {}: {e}", path.display()),
        )
    })
}
