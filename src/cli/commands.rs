//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{parse, tokenize, ToTermTree};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load()?.with_overrides(cli.output.clone(), cli.preview);
    debug!("settings: {:?}", settings);

    if cli.show_config {
        output::info(&settings.to_toml()?);
    }

    let layout = match cli.layout.as_deref().map(str::trim) {
        Some(layout) if !layout.is_empty() => layout,
        _ if cli.show_config => return Ok(()),
        _ => {
            return Err(CliError::Usage(
                "no layout string provided, use --layout to specify one".to_string(),
            ))
        }
    };

    if cli.tokens {
        print_tokens(layout)?;
    }
    if cli.ast {
        print_ast(layout)?;
    }
    if cli.tokens || cli.ast {
        return Ok(());
    }

    let container = ServiceContainer::new(settings);
    create_layout(&container, layout)
}

#[instrument(level = "debug")]
fn print_tokens(layout: &str) -> CliResult<()> {
    let tokens = tokenize(layout).map_err(ApplicationError::from)?;
    output::header("Tokens");
    for token in &tokens {
        output::detail(token);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn print_ast(layout: &str) -> CliResult<()> {
    let expr = parse(layout).map_err(ApplicationError::from)?;
    output::header("Layout");
    output::info(&expr.to_term_tree());
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn create_layout(container: &ServiceContainer, layout: &str) -> CliResult<()> {
    let service = container.layout_service();
    let settings = &container.settings;

    let tree = service.plan(layout)?;

    if settings.preview {
        let root = settings.output_dir.display().to_string();
        output::info(&tree.to_term_tree_with_root(root));
        output::info(&format!("{} directories", tree.dir_count()));
        return Ok(());
    }

    let report = service.materialize(&tree, &settings.output_dir)?;
    output::success(&format!(
        "Directory layout created successfully! ({} created, {} already present)",
        report.created.len(),
        report.existing
    ));
    Ok(())
}
