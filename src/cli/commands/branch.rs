use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{format_branches, print_json};
use crate::cli::types::BranchCommands;
use crate::domain::models::Branch;
use crate::domain::ports::BranchesClient;
use crate::services::BranchGateway;

/// Dispatch a branch subcommand against the gateway
pub async fn execute<C: BranchesClient>(
    gateway: &BranchGateway<C>,
    command: BranchCommands,
    json: bool,
) -> Result<()> {
    match command {
        BranchCommands::List { project } => handle_list(gateway, &project, json).await,
        BranchCommands::Show { project, branch } => {
            handle_show(gateway, &project, &branch, json).await
        }
        BranchCommands::Create {
            project,
            branch,
            mkdocs,
        } => {
            let body = read_branch(&project, &branch, &mkdocs).await?;
            gateway
                .create_branch(&project, &body)
                .await
                .context("Failed to create branch")?;
            report(json, "created", &project, &branch)
        }
        BranchCommands::Update {
            project,
            branch,
            mkdocs,
        } => {
            let body = read_branch(&project, &branch, &mkdocs).await?;
            gateway
                .update_branch(&project, &branch, &body)
                .await
                .context("Failed to update branch")?;
            report(json, "updated", &project, &branch)
        }
        BranchCommands::Delete { project, branch } => {
            gateway
                .delete_branch(&project, &branch)
                .await
                .context("Failed to delete branch")?;
            report(json, "deleted", &project, &branch)
        }
    }
}

/// Handle branch list command
async fn handle_list<C: BranchesClient>(
    gateway: &BranchGateway<C>,
    project: &str,
    json: bool,
) -> Result<()> {
    let branches = gateway
        .list_branches(project)
        .await
        .context("Failed to list branches")?;

    if json {
        return print_json(&branches);
    }

    if branches.is_empty() {
        println!("No branches found for project {project}.");
        return Ok(());
    }

    println!("Branches of {project}:");
    println!("{}", format_branches(&branches));
    Ok(())
}

/// Handle branch show command
async fn handle_show<C: BranchesClient>(
    gateway: &BranchGateway<C>,
    project: &str,
    branch: &str,
    json: bool,
) -> Result<()> {
    let branch = gateway
        .get_branch(project, branch)
        .await
        .context("Failed to retrieve branch")?;

    if json {
        return print_json(&branch);
    }

    println!("\nBranch Details:");
    println!("─────────────────────────────────────────");
    println!("Project:     {}", branch.branch.project_id);
    println!("Name:        {}", branch.name());
    println!("Docs dir:    {}", branch.docs_dir);
    if let Some(site_name) = &branch.site_name {
        println!("Site name:   {site_name}");
    }
    Ok(())
}

async fn read_branch(project: &str, branch: &str, mkdocs: &Path) -> Result<Branch> {
    let yaml = tokio::fs::read_to_string(mkdocs)
        .await
        .with_context(|| format!("Failed to read {}", mkdocs.display()))?;
    Ok(Branch::new(project, branch, yaml))
}

fn report(json: bool, action: &str, project: &str, branch: &str) -> Result<()> {
    if json {
        print_json(&serde_json::json!({
            "status": action,
            "project": project,
            "branch": branch,
        }))
    } else {
        println!("Branch {branch} {action} in project {project}.");
        Ok(())
    }
}
