//! One-shot subcommands sharing the menu's views

use std::io::Write;
use workflow_catalog::presentation::{
    render_details, render_install_success, render_installing, render_list, render_no_results,
    render_statistics,
};
use workflow_catalog::{CatalogError, QueryEngine, WorkflowInstaller, WorkflowRecord};

use crate::config::Commands;

pub async fn run_command<W: Write>(
    command: &Commands,
    engine: &QueryEngine,
    installer: &WorkflowInstaller,
    out: &mut W,
) -> anyhow::Result<()> {
    log::debug!("Running command: {:?}", command);

    match command {
        Commands::List { category, json } => {
            let workflows = match category {
                Some(label) if !engine.catalog().has_category(label) => {
                    return Err(CatalogError::UnknownCategory(label.clone()).into());
                }
                Some(label) => engine.filter_by_category(label),
                None => engine.catalog().all_workflows().iter().collect(),
            };
            write_workflows(out, &workflows, *json)?;
        }
        Commands::Search { query, json } => {
            let results = engine.search(query)?;
            write_workflows(out, &results, *json)?;
        }
        Commands::Show { id } => {
            let workflow = find(engine, id)?;
            out.write_all(render_details(workflow).as_bytes())?;
        }
        Commands::Stats { json } => {
            let stats = engine.compute_statistics();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                out.write_all(render_statistics(&stats).as_bytes())?;
            }
        }
        Commands::Install { id } => {
            let workflow = find(engine, id)?;
            out.write_all(render_installing().as_bytes())?;
            out.flush()?;
            let report = installer.install(workflow).await;
            out.write_all(render_install_success(&report).as_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn find<'a>(engine: &'a QueryEngine, id: &str) -> Result<&'a WorkflowRecord, CatalogError> {
    engine
        .catalog()
        .find_by_id(id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

fn write_workflows<W: Write>(
    out: &mut W,
    workflows: &[&WorkflowRecord],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(workflows)?)?;
    } else if workflows.is_empty() {
        out.write_all(render_no_results().as_bytes())?;
    } else {
        out.write_all(render_list(workflows).as_bytes())?;
    }
    Ok(())
}
