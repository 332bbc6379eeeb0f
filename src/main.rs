use clap::Parser;
use concert_renamer::cli::{resolve_target_dir, Args, ENV_DEFAULT_DIR};
use concert_renamer::completion::{config_from_env, model_from_env, OpenAiClient, ENV_API_KEY};
use concert_renamer::logging;
use concert_renamer::output::{display_dry_run, display_execution_result};
use concert_renamer::progress::{should_use_colors, Progress};
use concert_renamer::rename::{DirectoryRenamer, RenameOptions};
use concert_renamer::requester::{FilenameRequester, RequesterConfig, DEFAULT_MODEL};
use concert_renamer::sanitizer::ResponseSanitizer;
use concert_renamer::scanner::{ensure_directory, scan_directory};
use concert_renamer::{AppError, ExitCode};
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            std::process::exit(code.into());
        }
    };

    logging::init(args.verbose);

    debug!("Environment loaded");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Everything fatal is checked before the first request or rename
    let target_dir = resolve_target_dir(args.target_dir.clone()).ok_or(
        AppError::MissingDirectory {
            env_var: ENV_DEFAULT_DIR,
        },
    )?;
    ensure_directory(&target_dir)?;

    let completion_config = config_from_env(args.timeout);
    if !completion_config.is_configured() {
        return Err(AppError::MissingCredential { var: ENV_API_KEY });
    }
    let client = OpenAiClient::new(completion_config)?;

    let requester_config = RequesterConfig {
        output_format: args.output_format,
        model: args
            .model
            .or_else(model_from_env)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        max_tokens: args.max_tokens,
        temperature: args.temperature,
    };
    info!(
        "Using model {} with format {:?}",
        requester_config.model, requester_config.output_format
    );

    let sanitizer = ResponseSanitizer::new().add_failure_markers(args.failure_markers);
    let options = RenameOptions {
        dry_run: args.noop,
        on_no_proposal: args.on_no_proposal,
    };
    let renamer = DirectoryRenamer::new(
        FilenameRequester::new(client, requester_config),
        sanitizer,
        options,
    );

    let mut progress = Progress::new_with_ui(args.verbose > 0, should_use_colors());

    progress.scan_start(&target_dir);
    let entries = scan_directory(&target_dir)?;
    progress.scan_complete(entries.len(), args.noop);

    let report = renamer.rename_all(&entries, &mut progress);

    if args.noop {
        display_dry_run(&report, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    } else {
        display_execution_result(&report, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    }

    Ok(())
}
