//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::SessionSummary;
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::Node;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{Prompter, TerminalPrompter};
use crate::util::path::expand_path;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        eprintln!("Generating completion file for {shell:?}...");
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    if cli.show_config {
        output::info(&Settings::load()?.to_toml()?);
        return Ok(());
    }

    let database = database_path(cli)?;
    let container = ServiceContainer::new(Settings::load()?);

    if cli.show {
        return show(&container, &database, cli.create);
    }

    if cli.create && container.fs.exists(&database) {
        output::warning(&format!(
            "{} will be replaced by a new knowledge base",
            database.display()
        ));
    }
    let summary = play(&container, &database, cli.create, TerminalPrompter::terminal())?;
    output::success(&format!(
        "{} games, {} guessed, {} learned; saved to {}",
        summary.games,
        summary.guessed,
        summary.learned,
        database.display()
    ));
    Ok(())
}

fn database_path(cli: &Cli) -> CliResult<PathBuf> {
    cli.database
        .as_deref()
        .map(expand_path)
        .ok_or_else(|| CliError::Usage("database expected".to_string()))
}

/// Open the knowledge base, play a session and save the grown tree.
///
/// Nothing is written if the session fails.
#[instrument(skip(container, prompter))]
pub fn play<P: Prompter>(
    container: &ServiceContainer,
    database: &Path,
    create: bool,
    prompter: P,
) -> CliResult<SessionSummary> {
    let knowledge = container.knowledge_service();
    let tree = knowledge.open(database, create)?;

    let mut session = container.session_service(prompter);
    let (tree, summary) = session.play_session(tree)?;
    debug!("tree after session: depth {}", tree.depth());

    knowledge.save(database, &tree)?;
    Ok(summary)
}

#[instrument(skip(container))]
fn show(container: &ServiceContainer, database: &Path, create: bool) -> CliResult<()> {
    let tree = container.knowledge_service().open(database, create)?;
    output::info(&tree.to_tree_string());
    print_stats(&tree);
    Ok(())
}

fn print_stats(tree: &Node) {
    output::header("Knowledge base");
    output::detail(&format!("animals:   {}", tree.leaf_count()));
    output::detail(&format!("questions: {}", tree.question_count()));
    output::detail(&format!("depth:     {}", tree.depth()));
}
