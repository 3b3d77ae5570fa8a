use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use tracing::{info, info_span, Instrument};

use artistly_app::SubmitOutcome;
use artistly_core::catalog::{ArtistStatus, CatalogFilter};
use artistly_core::ids::ArtistId;
use artistly_core::onboarding::{FormData, FormOptions, TOTAL_STEPS};
use artistly_core::review::{ReviewDecision, ReviewFilter};

use crate::bootstrap::AppRuntime;

#[derive(Debug, Parser)]
#[command(name = "artistly")]
#[command(about = "Artist booking directory: catalog, onboarding and review", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List approved artists
    Catalog {
        /// Case-insensitive match on name or bio
        #[arg(short, long, default_value = "")]
        search: String,
        /// Repeat to match any of several categories
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        price_range: Option<String>,
    },
    /// Review dashboard table
    Dashboard {
        /// Case-insensitive match on name or location
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Status totals over every application
    Counts,
    /// Show one application
    Show { id: u32 },
    /// Approve or reject a pending application
    Review {
        id: u32,
        #[arg(value_enum)]
        decision: DecisionArg,
    },
    /// Run the onboarding wizard over a JSON application file
    Onboard {
        /// FormData as JSON (camelCase keys)
        application: PathBuf,
    },
    /// Print the option lists offered by the wizard
    Options,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Approved,
    Rejected,
}

impl From<StatusArg> for ArtistStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Pending => ArtistStatus::Pending,
            StatusArg::Approved => ArtistStatus::Approved,
            StatusArg::Rejected => ArtistStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DecisionArg {
    Approve,
    Reject,
}

impl From<DecisionArg> for ReviewDecision {
    fn from(value: DecisionArg) -> Self {
        match value {
            DecisionArg::Approve => ReviewDecision::Approve,
            DecisionArg::Reject => ReviewDecision::Reject,
        }
    }
}

/// Run one command and return its JSON output.
pub async fn execute(runtime: &AppRuntime, command: Command) -> Result<Value> {
    let usecases = runtime.usecases();
    match command {
        Command::Catalog {
            search,
            categories,
            location,
            price_range,
        } => {
            let filter = CatalogFilter {
                search,
                categories: categories.into_iter().collect(),
                location,
                price_range,
            };
            let result = usecases.browse_artists().execute(&filter).await?;
            Ok(serde_json::to_value(result)?)
        }
        Command::Dashboard {
            search,
            category,
            status,
            page,
        } => {
            let filter = ReviewFilter {
                search,
                category,
                status: status.map(ArtistStatus::from),
            };
            let page = usecases.list_applications().execute(&filter, page).await?;
            Ok(serde_json::to_value(page)?)
        }
        Command::Counts => {
            let counts = usecases.get_status_counts().execute().await?;
            Ok(serde_json::to_value(counts)?)
        }
        Command::Show { id } => {
            let artist = usecases
                .get_application_detail()
                .execute(ArtistId(id))
                .await?;
            Ok(serde_json::to_value(artist)?)
        }
        Command::Review { id, decision } => {
            let artist = usecases
                .review_application()
                .execute(ArtistId(id), decision.into())
                .await?;
            Ok(serde_json::to_value(artist)?)
        }
        Command::Onboard { application } => onboard(runtime, application).await,
        Command::Options => Ok(serde_json::to_value(FormOptions::default())?),
    }
}

async fn onboard(runtime: &AppRuntime, application: PathBuf) -> Result<Value> {
    let content = std::fs::read_to_string(&application)
        .with_context(|| format!("Failed to read application: {}", application.display()))?;
    let form: FormData =
        serde_json::from_str(&content).context("Failed to parse application as JSON")?;

    let span = info_span!("cli.onboard", file = %application.display());
    async {
        let wizard = runtime.usecases().onboarding_wizard().with_form(form);

        for _ in 1..TOTAL_STEPS {
            let before = wizard.snapshot().await.current_step;
            let snapshot = wizard.advance().await;
            if snapshot.current_step == before {
                info!(step = before, "application stopped at validation");
                return Ok(json!({
                    "outcome": "invalid",
                    "errors": snapshot.errors,
                    "snapshot": snapshot,
                }));
            }
        }

        let outcome = wizard.submit().await;
        let entry = match &outcome {
            SubmitOutcome::Submitted { receipt } => match receipt
                .reference
                .as_deref()
                .and_then(|r| r.parse::<u32>().ok())
            {
                Some(id) => Some(
                    runtime
                        .usecases()
                        .get_application_detail()
                        .execute(ArtistId(id))
                        .await?,
                ),
                None => None,
            },
            _ => None,
        };

        let mut output = serde_json::to_value(&outcome)?;
        output["snapshot"] = serde_json::to_value(wizard.snapshot().await)?;
        output["entry"] = serde_json::to_value(entry)?;
        Ok::<Value, anyhow::Error>(output)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistly_core::config::AppConfig;

    fn runtime() -> AppRuntime {
        AppRuntime::from_config(&AppConfig::empty())
    }

    #[test]
    fn parses_catalog_filters() {
        let cli = Cli::parse_from([
            "artistly",
            "catalog",
            "--search",
            "dj",
            "--category",
            "DJ",
            "--category",
            "Musician",
            "--location",
            "Goa",
        ]);
        let Command::Catalog {
            search,
            categories,
            location,
            price_range,
        } = cli.command
        else {
            panic!("expected catalog command");
        };
        assert_eq!(search, "dj");
        assert_eq!(categories, vec!["DJ", "Musician"]);
        assert_eq!(location.as_deref(), Some("Goa"));
        assert!(price_range.is_none());
    }

    #[test]
    fn parses_review_decision_and_global_config() {
        let cli = Cli::parse_from(["artistly", "review", "6", "approve", "--config", "a.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert!(matches!(
            cli.command,
            Command::Review {
                id: 6,
                decision: DecisionArg::Approve
            }
        ));
    }

    #[tokio::test]
    async fn counts_cover_seeded_directory() {
        let value = execute(&runtime(), Command::Counts).await.unwrap();
        assert_eq!(value["total"], 12);
        assert_eq!(value["pending"], 2);
    }

    #[tokio::test]
    async fn dashboard_filters_by_status() {
        let value = execute(
            &runtime(),
            Command::Dashboard {
                search: String::new(),
                category: None,
                status: Some(StatusArg::Pending),
                page: 1,
            },
        )
        .await
        .unwrap();

        assert_eq!(value["totalItems"], 2);
        assert_eq!(value["items"][0]["name"], "Vikram Joshi");
    }

    #[tokio::test]
    async fn reviewing_decided_application_fails() {
        let err = execute(
            &runtime(),
            Command::Review {
                id: 1,
                decision: DecisionArg::Reject,
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("already approved"));
    }

    #[tokio::test]
    async fn options_lists_categories() {
        let value = execute(&runtime(), Command::Options).await.unwrap();
        assert_eq!(value["categories"].as_array().unwrap().len(), 8);
    }
}
