//! SheetForge - Call of Cthulhu 7th Ed character sheet formatter
//!
//! One-shot pipeline: load a YAML character record, validate it against the
//! game schema, fill in derived defaults, resolve the skill catalog, arrange
//! the print layout and substitute the result into a LaTeX template.

mod application;
mod domain;
mod infrastructure;

use std::fs;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::outbound::{RecordLoaderPort, TemplateRendererPort};
use crate::application::services::SheetAssemblyService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::dice::RandDiceRoller;
use crate::infrastructure::loader::YamlRecordLoader;
use crate::infrastructure::renderer::LatexTemplateRenderer;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_args()?;
    tracing::info!("Starting SheetForge");
    tracing::info!("  Template: {}", config.template_path.display());
    tracing::info!("  Input: {}", config.input_path.display());
    tracing::info!("  Output: {}", config.output_path.display());

    let loader = YamlRecordLoader::new();
    let record = loader
        .load(&config.input_path)
        .context("failed to load character record")?;

    let mut assembly = SheetAssemblyService::new(Box::new(RandDiceRoller::new()));
    let context = assembly.assemble(&record)?;
    let context =
        serde_json::to_value(&context).context("failed to serialize render context")?;

    let renderer = LatexTemplateRenderer::new();
    let rendered = renderer
        .render(&config.template_path, &context)
        .context("template rendering failed")?;

    fs::write(&config.output_path, rendered)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;
    tracing::info!("Wrote rendered sheet to {}", config.output_path.display());

    Ok(())
}
