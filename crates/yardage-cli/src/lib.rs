//! Yardage CLI - command line tools for the shot planner.
//!
//! This crate provides the CLI binaries:
//! - plan_shot: plan one shot path and print it
//! - follow_plan: walk a simulated player along the plan, re-planning as they go

pub mod client;
pub mod config;
pub mod report;
pub mod source;

pub use client::CourseClient;
pub use config::Config;
pub use report::PlanReport;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber shared by the binaries.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("yardage_cli=info".parse()?)
                .add_directive("yardage_core=info".parse()?),
        )
        .init();
    Ok(())
}
