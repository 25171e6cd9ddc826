//! # Projects Subcommand
//!
//! `folio projects [--status all|active|inactive] [--search TERM] [--json]`

use std::io::Write;

use clap::Args;
use folio_core::{PortfolioApi, StatusFilter};
use folio_state::{ProjectListController, ProjectListView};

/// Arguments for the projects subcommand.
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Status filter: all, active, or inactive.
    #[arg(long, default_value_t = StatusFilter::All)]
    pub status: StatusFilter,

    /// Case-insensitive substring matched against name and description.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Print the filtered projects as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Load, filter, and print the project list.
pub async fn run<A: PortfolioApi>(
    args: &ProjectsArgs,
    api: A,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let controller = ProjectListController::new(api);
    controller.load().await;
    controller.set_status_filter(args.status);
    controller.set_search_term(args.search.as_str());

    if args.json {
        let projects = controller.filtered_projects();
        serde_json::to_writer_pretty(&mut *out, &projects)?;
        writeln!(out)?;
        return Ok(());
    }

    controller.with_state(|state| render(&state.view(), out))
}

fn render(view: &ProjectListView<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    match view {
        ProjectListView::Spinner => writeln!(out, "Loading...")?,
        ProjectListView::Empty(message) => writeln!(out, "{message}")?,
        ProjectListView::Populated(projects) => {
            for project in projects {
                writeln!(out, "{} [{}]", project.name, project.status)?;
                if !project.description.is_empty() {
                    writeln!(out, "    {}", project.description)?;
                }
                if !project.github.is_empty() {
                    writeln!(out, "    {}", project.github)?;
                }
            }
        }
    }
    Ok(())
}
