//! Project listing, detail, filter tabs and featured selection

use anyhow::{bail, Context, Result};
use clap::Parser;
use folio_core::catalog::{
    browse, category_label, featured_by_domain, filter_tabs, CategoryFilter, ProjectRecord,
    ALL_TOKEN,
};

use super::Session;

#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    /// Category token to show (see `folio categories`)
    #[arg(long, short = 'c', default_value = ALL_TOKEN)]
    pub category: String,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project slug
    pub slug: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn print_row(project: &ProjectRecord) {
    println!(
        "{:<4}  {:<16}  {:<26}  {}",
        project.year,
        category_label(&project.category),
        project.slug,
        project.title
    );
}

pub fn run_projects(args: ProjectsArgs, session: &Session) -> Result<()> {
    let filter = CategoryFilter::from_token(args.category.trim());
    let listing = browse(&session.portfolio.projects, &filter);

    if args.json {
        let json = serde_json::to_string_pretty(&listing).context("Failed to serialize projects")?;
        println!("{json}");
        return Ok(());
    }

    if listing.is_empty() {
        println!("No projects in category '{}'.", filter.token());
        return Ok(());
    }
    for project in listing {
        print_row(project);
    }
    Ok(())
}

pub fn run_project(args: ProjectArgs, session: &Session) -> Result<()> {
    let Some(project) = session.portfolio.project(&args.slug) else {
        bail!("No project with slug '{}'", args.slug);
    };

    if args.json {
        let json = serde_json::to_string_pretty(project).context("Failed to serialize project")?;
        println!("{json}");
        return Ok(());
    }

    println!("{} ({})", project.title, project.year);
    println!("{}", category_label(&project.category));
    println!();
    println!("{}", project.headline());
    if let Some(impact) = &project.impact {
        println!("{impact}");
    }
    if !project.stack.is_empty() {
        println!("\nStack: {}", project.stack.join(", "));
    }
    if !project.tags.is_empty() {
        println!("Tags: {}", project.tags.join(", "));
    }

    if let Some(study) = &project.extended_case_study {
        println!("\n{}", study.what_it_is);
        print_list("Key features", &study.key_features);
        print_list("How it works", &study.technical_breakdown.how_it_works);
        print_list("Architecture", &study.technical_breakdown.architecture);
        print_list("Install", &study.setup_usage.install);
        if let Some(quick_start) = &study.setup_usage.quick_start {
            println!("\nQuick start:\n  {quick_start}");
        }
        if !study.setup_usage.parameters.is_empty() {
            println!("\nParameters:");
            for param in &study.setup_usage.parameters {
                println!("  {} ({}): {}", param.name, param.kind, param.effect);
            }
        }
        print_list("Challenges & learnings", &study.challenges_learnings);
        print_list("Outcomes", &study.outcomes);
    } else if let Some(study) = &project.case_study {
        println!("\n{}", study.overview);
        println!("\nProblem: {}", study.problem);
        println!("Approach: {}", study.approach);
        print_list("Features", &study.features);
        println!("\nChallenges: {}", study.challenges);
        println!("Outcome: {}", study.outcome);
    }

    if let Some(url) = project.source_url() {
        println!("\nSource: {url}");
    }
    Ok(())
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for item in items {
        println!("  - {item}");
    }
}

pub fn run_categories(session: &Session) -> Result<()> {
    for tab in filter_tabs() {
        let filter = CategoryFilter::from_token(tab.id);
        let count = session
            .portfolio
            .projects
            .iter()
            .filter(|p| filter.matches(p))
            .count();
        println!("{:<14}  {:<22}  {}", tab.id, tab.label, count);
    }
    Ok(())
}

pub fn run_featured(session: &Session) -> Result<()> {
    for project in featured_by_domain(&session.portfolio.projects) {
        print_row(project);
    }
    Ok(())
}
