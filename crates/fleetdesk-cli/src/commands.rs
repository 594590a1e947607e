//! Command handlers

use fleetdesk_app::config::Config;
use fleetdesk_app::{merge_edit, open_truck_repository, submit_truck, TruckEdit};
use fleetdesk_domain::validate_truck;
use fleetdesk_types::{Error, OutputFormat, Result, Truck};

use crate::cli::{Cli, Commands};
use crate::output::{output_statuses, output_submit, output_trucks, output_validation};

/// Run a command and return the process exit code
pub async fn execute(cli: Cli) -> Result<i32> {
    let endpoint = cli.endpoint.as_deref();

    match cli.command {
        Commands::List => {
            let config = Config::load()?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_list(&config, endpoint, output_format).await
        }

        Commands::Create { fields } => {
            let config = Config::load()?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_submit(&config, endpoint, output_format, fields.to_truck()).await
        }

        Commands::Update {
            id,
            code,
            name,
            status,
            description,
        } => {
            let config = Config::load()?;
            let output_format = cli.format.unwrap_or(config.output_format);
            let edit = TruckEdit {
                code,
                name,
                status,
                description,
            };
            cmd_update(&config, endpoint, output_format, &id, edit).await
        }

        Commands::Validate { fields } => {
            let output_format = offline_format(cli.format, Config::load);
            let result = validate_truck(&fields.to_truck());
            output_validation(output_format, &result)?;
            Ok(if result.is_valid { 0 } else { 1 })
        }

        Commands::Statuses => {
            output_statuses(offline_format(cli.format, Config::load))?;
            Ok(0)
        }

        Commands::Config {
            show,
            set_endpoint,
            set_output,
            reset,
        } => {
            cmd_config(show, set_endpoint, set_output, reset)?;
            Ok(0)
        }
    }
}

/// Output format for commands that run without the API. An unreadable
/// config file falls back to the default format instead of failing.
fn offline_format(
    requested: Option<OutputFormat>,
    load: impl FnOnce() -> Result<Config>,
) -> OutputFormat {
    requested.unwrap_or_else(|| match load() {
        Ok(config) => config.output_format,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable config");
            OutputFormat::default()
        }
    })
}

async fn cmd_list(config: &Config, endpoint: Option<&str>, output_format: OutputFormat) -> Result<i32> {
    let repo = open_truck_repository(config, endpoint)?;
    repo.fetch_all().await?;
    output_trucks(output_format, &repo.items())?;
    Ok(0)
}

async fn cmd_submit(
    config: &Config,
    endpoint: Option<&str>,
    output_format: OutputFormat,
    form: Truck,
) -> Result<i32> {
    let repo = open_truck_repository(config, endpoint)?;
    let outcome = submit_truck(&repo, &form).await?;
    output_submit(output_format, &outcome)?;
    Ok(0)
}

async fn cmd_update(
    config: &Config,
    endpoint: Option<&str>,
    output_format: OutputFormat,
    id: &str,
    edit: TruckEdit,
) -> Result<i32> {
    let repo = open_truck_repository(config, endpoint)?;
    repo.fetch_all().await?;
    tracing::debug!(id, known = repo.len(), "Looking up truck to edit");
    let existing = repo
        .get(id)
        .ok_or_else(|| Error::TruckNotFound(id.to_string()))?;

    let form = merge_edit(&existing, edit);
    let outcome = submit_truck(&repo, &form).await?;
    output_submit(output_format, &outcome)?;
    Ok(0)
}

fn cmd_config(
    show: bool,
    set_endpoint: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(endpoint) = set_endpoint {
        let endpoint = Config::default().resolve_endpoint(Some(&endpoint))?;
        config.api_endpoint = Some(endpoint);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
