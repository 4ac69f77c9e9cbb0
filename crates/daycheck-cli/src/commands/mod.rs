pub mod completions;
pub mod config;
pub mod greet;
pub mod questions;
pub mod replay;
pub mod run;

use clap::Args;
use std::path::PathBuf;

use daycheck_core::error::Result;
use daycheck_core::{Config, QuestionCatalog, TimeOfDay};

/// Options shared by every command that starts a session.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Time of day (morning, afternoon, evening, night); defaults to the config override, then the clock
    #[arg(long, short = 't')]
    pub time_of_day: Option<TimeOfDay>,
    /// Question catalog TOML file; defaults to the configured catalog, then the built-in questions
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl SessionArgs {
    pub fn resolve(&self, config: &Config) -> Result<(QuestionCatalog, TimeOfDay)> {
        let catalog = config.catalog(self.catalog.as_deref())?;
        let time_of_day = config.resolve_time_of_day(self.time_of_day);
        tracing::debug!(%time_of_day, questions = catalog.len(), "session resolved");
        Ok((catalog, time_of_day))
    }
}
