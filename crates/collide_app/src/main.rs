//! # collide_app — collision dispatch driver
//!
//! Builds the handler registry, spawns the reference scene, and runs the
//! reference collision script through the dispatcher.
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments and resolve the binding manifest (`--manifest`, then
//!    `COLLIDE_MANIFEST`, else the built-in table).
//! 2. Bootstrap and freeze the registry. Any rejected binding aborts the run.
//! 3. Spawn the scene, describe every object, dispatch each scripted pair.

mod config;
mod scene;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use collide_dispatch::{BindingManifest, FrozenRegistry, bootstrap};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use scene::{REFERENCE_SCRIPT, Scene};

#[derive(Parser)]
#[command(name = "collide_app", about = "Pairwise collision dispatch demo")]
struct Args {
    /// JSON binding manifest to use instead of the built-in bindings
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Print every bound pair before running the script
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("collide_app=info".parse()?)
                .add_directive("collide_dispatch=info".parse()?)
                .add_directive("space_objects=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::new().with_list_bindings(args.list);
    if let Some(path) = args.manifest {
        config = config.with_manifest(path);
    }
    let config = config.with_env_fallback();

    info!("collision demo starting");

    let registry = build_registry(&config)?;
    if config.list_bindings {
        for ((first, second), handler) in registry.pairs() {
            info!(%first, %second, handler = handler.name(), "bound");
        }
    }

    let scene = Scene::reference();
    if scene.is_empty() {
        warn!("scene has no objects; nothing to collide");
        return Ok(());
    }
    info!(objects = scene.len(), "scene spawned");
    for object in scene.iter() {
        info!(id = %object.id(), "{object}");
        info!("{}", object.fly());
    }

    let summary = scene.run_script(&registry.dispatcher(), &REFERENCE_SCRIPT);
    info!(
        handled = summary.handled,
        not_handled = summary.not_handled,
        "collision demo finished"
    );
    Ok(())
}

fn build_registry(config: &AppConfig) -> Result<FrozenRegistry> {
    let registry = match &config.manifest {
        Some(path) => {
            let manifest = BindingManifest::load(path)?;
            space_objects::catalog()
                .context("building the handler catalog")?
                .bootstrap(&manifest)
                .with_context(|| format!("bootstrapping from {}", path.display()))?
        }
        None => bootstrap(space_objects::default_bindings())
            .context("bootstrapping built-in bindings")?,
    };
    Ok(registry.freeze())
}
