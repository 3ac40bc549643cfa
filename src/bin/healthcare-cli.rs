// ABOUTME: Healthcare CLI - command-line tool for scoring questionnaires and inspecting storage
// ABOUTME: Evaluates metrics files offline and lists stored users and assessments as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors
//!
//! Usage:
//! ```bash
//! # Score a questionnaire (a single object or an array of objects)
//! healthcare-cli evaluate --file metrics.json
//! cat metrics.json | healthcare-cli evaluate
//!
//! # List registered users
//! healthcare-cli users
//!
//! # List stored assessments, optionally for one user
//! healthcare-cli assessments --email ada@example.com
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use healthcare_portal::{
    config::load_risk_engine_config,
    constants::defaults,
    database::Database,
    logging::LoggingConfig,
    models::{HealthMetrics, RiskAssessment},
    RiskEngine,
};
use serde::Serialize;
use serde_json::json;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "healthcare-cli",
    about = "Healthcare portal CLI",
    long_about = "Score health questionnaires offline and inspect stored users and assessments."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (defaults to `DATABASE_URL`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Score metrics JSON and print the assessment
    Evaluate {
        /// Metrics file; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,

        /// Risk engine configuration overriding the built-in rules
        #[arg(long)]
        risk_config: Option<PathBuf>,
    },

    /// List registered users
    Users,

    /// List stored assessments, newest first
    Assessments {
        /// Only show assessments of the user with this email
        #[arg(long)]
        email: Option<String>,
    },
}

/// One evaluated questionnaire in batch output
#[derive(Serialize)]
#[serde(untagged)]
enum EvaluationOutput {
    Assessment(RiskAssessment),
    Error { error: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Evaluate { file, risk_config } => evaluate(file, risk_config),
        Command::Users => {
            let database = open_database(cli.database_url).await?;
            list_users(&database).await
        }
        Command::Assessments { email } => {
            let database = open_database(cli.database_url).await?;
            list_assessments(&database, email).await
        }
    }
}

async fn open_database(database_url: Option<String>) -> Result<Database> {
    let database_url = database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DEFAULT_DATABASE_URL.to_owned());
    Database::new(&database_url).await
}

fn evaluate(file: Option<PathBuf>, risk_config: Option<PathBuf>) -> Result<()> {
    let raw = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read metrics from stdin")?;
            buffer
        }
    };

    let engine = match risk_config {
        Some(path) => RiskEngine::with_config(&load_risk_engine_config(&path)?)?,
        None => RiskEngine::new(),
    };

    let value: serde_json::Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let output = if value.is_array() {
        let batch: Vec<HealthMetrics> =
            serde_json::from_value(value).context("Input is not an array of metrics")?;
        let results: Vec<EvaluationOutput> = engine
            .evaluate_batch(&batch)
            .into_iter()
            .map(|result| match result {
                Ok(assessment) => EvaluationOutput::Assessment(assessment),
                Err(e) => EvaluationOutput::Error {
                    error: e.to_string(),
                },
            })
            .collect();
        serde_json::to_string_pretty(&results)?
    } else {
        let metrics: HealthMetrics =
            serde_json::from_value(value).context("Input is not a metrics object")?;
        let assessment = engine
            .evaluate(&metrics)
            .map_err(|e| anyhow!("Cannot score metrics: {e}"))?;
        serde_json::to_string_pretty(&assessment)?
    };

    println!("{output}");
    Ok(())
}

async fn list_users(database: &Database) -> Result<()> {
    let users = database.list_users().await?;
    println!("{}", serde_json::to_string_pretty(&users)?);
    Ok(())
}

async fn list_assessments(database: &Database, email: Option<String>) -> Result<()> {
    let records = match email {
        Some(email) => {
            let user = database
                .get_user_by_email(&email)
                .await?
                .ok_or_else(|| anyhow!("No user registered with email {email}"))?;
            database.list_assessments_for_user(user.id).await?
        }
        None => database.list_all_assessments().await?,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "count": records.len(),
            "assessments": records,
        }))?
    );
    Ok(())
}
