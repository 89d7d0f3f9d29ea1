use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use portal_client::api::{
    ApiBusinessPlan, ApiCpReport, ApiMeeting, ApiProject, ApiReplenishment,
    ApiReplenishmentStatusFile,
};
use portal_client::config::Settings;
use portal_client::fetch::{endpoints, FetchClient, FetchOptions, ResultEnvelope};
use portal_client::state::business_plans::{BpStatus, BusinessPlansIntent};
use portal_client::state::cp_reports::CpReportsIntent;
use portal_client::state::projects::{ProjectOrdering, ProjectsIntent};
use portal_client::state::AppStore;
use portal_client::views::default_registry;

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Query a multilateral fund portal backend")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print raw JSON rows instead of a listing.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List business plans.
    BusinessPlans {
        #[arg(long)]
        start_year: Option<i32>,
        #[arg(long)]
        end_year: Option<i32>,
        /// Agency id; repeat for several.
        #[arg(long = "agency")]
        agencies: Vec<i64>,
        /// Status (draft, submitted, endorsed, approved); repeat for several.
        #[arg(long = "status")]
        statuses: Vec<BpStatus>,
        #[arg(long)]
        search: Option<String>,
    },

    /// List projects.
    Projects {
        #[arg(long)]
        country: Option<i64>,
        #[arg(long)]
        agency: Option<i64>,
        #[arg(long)]
        sector: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Sort column (code, title, year).
        #[arg(long, default_value = "code")]
        sort: ProjectOrdering,
        #[arg(long)]
        descending: bool,
    },

    /// List country programme reports.
    CpReports {
        #[arg(long)]
        country: Option<i64>,
        #[arg(long)]
        year: Option<i32>,
    },

    /// List executive committee meetings.
    Meetings,

    /// List replenishments, or their status files.
    Replenishments {
        #[arg(long)]
        status_files: bool,
    },

    /// Resolve a portal path to its view.
    Resolve { path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    portal_client::init_tracing();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("configuration is unusable")?;

    if let Command::Resolve { path } = &cli.command {
        let registry = default_registry();
        let resolved = registry.resolve(path);

        println!("view: {}", resolved.descriptor.name);
        println!("layout: {}", resolved.descriptor.layout);

        let mut params: Vec<_> = resolved.params.iter().collect();
        params.sort();
        for (name, value) in params {
            println!("{name} = {value}");
        }
        return Ok(());
    }

    let store = AppStore::seeded(&settings);
    let client = FetchClient::new(&settings).context("cannot construct API client")?;
    tracing::info!(base_url = %client.base_url(), "querying portal");

    match cli.command {
        Command::BusinessPlans {
            start_year,
            end_year,
            agencies,
            statuses,
            search,
        } => {
            if start_year.is_some() || end_year.is_some() {
                store.dispatch(BusinessPlansIntent::SetPeriod {
                    start_year,
                    end_year,
                });
            }
            if !agencies.is_empty() {
                store.dispatch(BusinessPlansIntent::SetAgencies(agencies));
            }
            if !statuses.is_empty() {
                store.dispatch(BusinessPlansIntent::SetStatuses(statuses));
            }
            if let Some(search) = search {
                store.dispatch(BusinessPlansIntent::SetSearch(search));
            }

            let filter =
                store.select(|s| endpoints::BusinessPlanFilter::from_state(&s.business_plans));
            let envelope =
                endpoints::business_plans(&client, &filter, FetchOptions::cached()).await?;
            print_business_plans(&envelope, cli.json)?;
        }

        Command::Projects {
            country,
            agency,
            sector,
            status,
            search,
            sort,
            descending,
        } => {
            if country.is_some() {
                store.dispatch(ProjectsIntent::SetCountry(country));
            }
            if agency.is_some() {
                store.dispatch(ProjectsIntent::SetAgency(agency));
            }
            if sector.is_some() {
                store.dispatch(ProjectsIntent::SetSector(sector));
            }
            if status.is_some() {
                store.dispatch(ProjectsIntent::SetStatus(status));
            }
            if let Some(search) = search {
                store.dispatch(ProjectsIntent::SetSearch(search));
            }
            store.dispatch(ProjectsIntent::SetOrdering {
                ordering: sort,
                descending,
            });

            let filter = store.select(|s| endpoints::ProjectFilter::from_state(&s.projects));
            let envelope = endpoints::projects(&client, &filter, FetchOptions::cached()).await?;
            print_projects(&envelope, cli.json)?;
        }

        Command::CpReports { country, year } => {
            if country.is_some() {
                store.dispatch(CpReportsIntent::SetCountry(country));
            }
            if year.is_some() {
                store.dispatch(CpReportsIntent::SetYear(year));
            }

            let filter = store.select(|s| endpoints::CpReportFilter::from_state(&s.cp_reports));
            let envelope = endpoints::cp_reports(&client, &filter, FetchOptions::cached()).await?;
            print_cp_reports(&envelope, cli.json)?;
        }

        Command::Meetings => {
            let envelope = endpoints::meetings(&client, FetchOptions::cached()).await?;
            print_meetings(&envelope, cli.json)?;
        }

        Command::Replenishments { status_files } => {
            if status_files {
                let envelope =
                    endpoints::replenishment_status_files(&client, FetchOptions::cached()).await?;
                print_status_files(&envelope, cli.json)?;
            } else {
                let envelope = endpoints::replenishments(&client, FetchOptions::cached()).await?;
                print_replenishments(&envelope, cli.json)?;
            }
        }

        Command::Resolve { .. } => unreachable!("handled before client construction"),
    }

    Ok(())
}

fn print_business_plans(envelope: &ResultEnvelope<ApiBusinessPlan>, json: bool) -> Result<()> {
    if json {
        return print_json(&envelope.results);
    }

    println!("{} business plans", envelope.count);
    for plan in &envelope.results {
        println!(
            "#{} {} {}-{} [{}]",
            plan.id, plan.agency.acronym, plan.year_start, plan.year_end, plan.status
        );
    }
    Ok(())
}

fn print_projects(envelope: &ResultEnvelope<ApiProject>, json: bool) -> Result<()> {
    if json {
        return print_json(&envelope.results);
    }

    println!("{} projects", envelope.count);
    for project in &envelope.results {
        println!(
            "{} {} ({}, {}) [{}]",
            project.code, project.title, project.country, project.agency, project.status
        );
    }
    Ok(())
}

fn print_cp_reports(envelope: &ResultEnvelope<ApiCpReport>, json: bool) -> Result<()> {
    if json {
        return print_json(&envelope.results);
    }

    println!("{} country programme reports", envelope.count);
    for report in &envelope.results {
        println!(
            "{} {} [{}]",
            report.country_name, report.year, report.status
        );
    }
    Ok(())
}

fn print_meetings(envelope: &ResultEnvelope<ApiMeeting>, json: bool) -> Result<()> {
    if json {
        return print_json(&envelope.results);
    }

    println!("{} meetings", envelope.count);
    for meeting in &envelope.results {
        let date = meeting
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unscheduled".to_string());
        println!(
            "meeting {} ({}) {}",
            meeting.number,
            date,
            meeting.title.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn print_replenishments(envelope: &ResultEnvelope<ApiReplenishment>, json: bool) -> Result<()> {
    if json {
        return print_json(&envelope.results);
    }

    println!("{} replenishments", envelope.count);
    for replenishment in &envelope.results {
        println!(
            "{}-{}: {} USD",
            replenishment.start_year, replenishment.end_year, replenishment.amount
        );
    }
    Ok(())
}

fn print_status_files(
    envelope: &ResultEnvelope<ApiReplenishmentStatusFile>,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&envelope.results);
    }

    println!("{} status files", envelope.count);
    for file in &envelope.results {
        match file.meeting_number {
            Some(meeting) => println!("{} {} (meeting {})", file.year, file.filename, meeting),
            None => println!("{} {}", file.year, file.filename),
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(rows: &[T]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}
