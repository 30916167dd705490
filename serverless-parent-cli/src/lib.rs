//! Library interface for the `serverless-parent` command.
//!
//! The command loads a service's `serverless.yml`, merges the parent
//! configuration it inherits from, and prints the effective top-level
//! sections as YAML.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;

use serverless_parent::{ServiceConfig, YamlLoader};
use tracing::debug;

use crate::cli::Args;
use crate::error::CliError;

/// Resolve, merge and render the effective configuration described by `args`.
///
/// # Errors
///
/// Returns [`CliError::Parent`] when the service or parent configuration cannot
/// be located, loaded or rendered.
pub fn effective_config(args: &Args) -> Result<String, CliError> {
    let loader = YamlLoader::new();
    let mut service = ServiceConfig::load(args.service_dir().into_std_path_buf(), &loader)?;
    if let Some(home) = &args.home_dir {
        service = service.with_home_dir(home.clone().into_std_path_buf());
    }

    let outcome = service.inherit_parent(&loader)?;
    debug!(
        parent = %outcome.parent_path.display(),
        overwrite = outcome.overwrite_service_config,
        "inherited parent configuration"
    );
    Ok(service.render_effective()?)
}

/// Run the command: render the effective configuration and write it out.
///
/// # Errors
///
/// Propagates failures from [`effective_config`] and the output writers.
pub fn run(args: &Args) -> Result<(), CliError> {
    let rendered = effective_config(args)?;
    match &args.out {
        Some(out) => output::write_file(out, &rendered),
        None => output::write_stdout(&rendered),
    }
}
