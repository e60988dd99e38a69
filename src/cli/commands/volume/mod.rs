//! Single-volume conversion and arithmetic commands.
mod divide;
mod multiply;
mod show;

use std::sync::Arc;

pub use divide::DivideCommand;
pub use multiply::MultiplyCommand;
use serde::Serialize;
pub use show::ShowCommand;
use tracing::warn;

use crate::{
    cli::{CommandRegistry, formatting::format_fields},
    config::Config,
    volume::Volume,
};

/// Registers all volume commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config` - Shared configuration for output formatting
pub fn register_commands(registry: &mut CommandRegistry, config: Arc<Config>) {
    const CATEGORY_NAME: &str = "volume";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(config.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(MultiplyCommand::new(config.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(DivideCommand::new(config)));
}

/// Every representation of one volume, as printed by the volume commands
#[derive(Debug, Serialize)]
pub(crate) struct VolumeSummary {
    raw: u32,
    percent: f64,
    linear: f64,
    /// `None` for silence, which has no finite decibel value
    decibels: Option<f64>,
}

impl VolumeSummary {
    pub(crate) fn new(volume: Volume) -> Self {
        if volume > Volume::SAFE_MAX {
            warn!(raw = volume.raw(), "volume amplifies beyond 200%, expect clipping");
        }

        let db = volume.to_db();
        Self {
            raw: volume.raw(),
            percent: volume.percent(),
            linear: volume.to_linear().get(),
            decibels: (!db.is_silent()).then(|| db.as_f64()),
        }
    }

    pub(crate) fn to_text(&self, precision: usize) -> String {
        let volume = Volume::saturating(u64::from(self.raw));
        format_fields(&[
            ("raw", self.raw.to_string()),
            ("percent", format!("{volume}")),
            ("linear", format!("{:.6}", self.linear)),
            ("decibels", format!("{:.precision$}", volume.to_db())),
        ])
    }
}
