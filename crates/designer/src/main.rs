use std::process::ExitCode;

use garden_designer_lib::command::{execute_json_batch, inspect};
use garden_designer_lib::ids::UuidIdGenerator;
use garden_designer_lib::{EngineConfig, EngineSession};

struct Args {
    script: String,
    garden: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden_designer=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args() else {
        eprintln!("usage: garden-designer --script <commands.json> [--garden <garden.json>]");
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = EngineConfig::load();

    let mut session = match &args.garden {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read garden file {path}: {e}"))?;
            let garden: shared::Garden = serde_json::from_str(&json)
                .map_err(|e| format!("Failed to parse garden JSON from {path}: {e}"))?;
            tracing::info!("Loaded garden from {path} ({} elements)", garden.elements.len());
            EngineSession::from_garden(garden, config, Box::new(UuidIdGenerator))
                .map_err(|e| format!("Invalid garden {path}: {e}"))?
        }
        None => EngineSession::new(config),
    };

    let script = std::fs::read_to_string(&args.script)
        .map_err(|e| format!("Failed to read script {}: {e}", args.script))?;
    let responses = execute_json_batch(&mut session, &script)?;

    for (i, resp) in responses.iter().enumerate() {
        match &resp.error {
            Some(err) => tracing::warn!("command #{i}: {err}"),
            None => {
                let transition = resp
                    .data
                    .as_ref()
                    .and_then(|d| d.get("transition"))
                    .and_then(|t| t.as_str())
                    .unwrap_or("unchanged");
                tracing::info!("command #{i}: {transition}");
            }
        }
    }

    let summary = inspect(&session);
    tracing::info!(
        "Final garden: {} elements, history depth {}",
        summary["element_count"],
        summary["history_depth"]
    );

    let out = serde_json::to_string_pretty(session.garden())
        .map_err(|e| format!("Failed to serialize garden: {e}"))?;
    println!("{out}");
    Ok(())
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut script = None;
    let mut garden = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--script" if i + 1 < args.len() => {
                script = Some(args[i + 1].clone());
                i += 1;
            }
            "--garden" if i + 1 < args.len() => {
                garden = Some(args[i + 1].clone());
                i += 1;
            }
            other => tracing::warn!("Ignoring argument {other}"),
        }
        i += 1;
    }
    Some(Args {
        script: script?,
        garden,
    })
}
