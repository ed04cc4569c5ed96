//! Member Registry - Main entry point
//!
//! Reads newline-delimited JSON member registrations from stdin, registers
//! each one into an in-memory registry and writes one JSON outcome per line
//! to stdout. Logs go to stderr.

use anyhow::Result;
use member_registry::repositories::{InMemoryMemberRepository, MemberRepository};
use member_registry::services::{MemberService, MemberServiceImpl};
use member_registry::{Clock, Config, CreateMemberRequest, FieldError, MemberResponse, ServiceError};
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Result of one input line.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome {
    Created { member: MemberResponse },
    Rejected { errors: Vec<FieldError> },
    Conflict { errors: Vec<FieldError> },
    InvalidJson { message: String },
}

async fn register_line(service: &dyn MemberService, line: &str) -> Result<Outcome> {
    let request: CreateMemberRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return Ok(Outcome::InvalidJson {
                message: e.to_string(),
            })
        }
    };

    match service.create(request).await {
        Ok(member) => Ok(Outcome::Created { member }),
        Err(e) if e.is_conflict() => Ok(Outcome::Conflict {
            errors: e.field_errors(),
        }),
        Err(e @ ServiceError::Validation(_)) => Ok(Outcome::Rejected {
            errors: e.field_errors(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let clock = match config.clock() {
        Ok(clock) => clock,
        Err(e) => {
            error!("Failed to build clock: {}", e);
            return Err(e.into());
        }
    };
    info!("Registry date is {}", clock.today());

    let repository = Arc::new(InMemoryMemberRepository::new()) as Arc<dyn MemberRepository>;
    let service = MemberServiceImpl::new(
        repository,
        Arc::new(clock),
        config.default_page_size,
        config.max_page_size,
    );

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();
    let mut processed = 0usize;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        processed += 1;

        let outcome = register_line(&service, line).await?;
        let mut json = serde_json::to_string(&outcome)?;
        json.push('\n');
        stdout.write_all(json.as_bytes()).await?;
    }
    stdout.flush().await?;

    info!(
        "Processed {} lines, {} members registered",
        processed,
        service.count().await?
    );
    Ok(())
}
