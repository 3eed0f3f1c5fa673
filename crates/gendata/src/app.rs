//! One generate-then-render pass.

use crate::error::{AppError, AppResult};
use gendata_config::Config;
use gendata_graphs::{GraphRenderer, ScatterPlotRenderer};
use gendata_points::{DataGenerator, Range};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the chart was written.
    pub output_path: PathBuf,
    /// Number of points plotted.
    pub point_count: usize,
}

/// Generates points over [`Range::DEFAULT`] and renders them to the
/// configured output path.
///
/// A configured seed makes the run reproducible; otherwise the thread-local
/// generator is used.
pub fn run(config: &Config) -> AppResult<RunSummary> {
    let renderer = ScatterPlotRenderer::new(config);
    match config.seed {
        Some(seed) => {
            debug!(seed, "using seeded generator");
            run_with(config, &renderer, &mut StdRng::seed_from_u64(seed))
        }
        None => run_with(config, &renderer, &mut rand::rng()),
    }
}

/// [`run`] with an explicit renderer and random source.
pub fn run_with<G, R>(config: &Config, renderer: &G, rng: &mut R) -> AppResult<RunSummary>
where
    G: GraphRenderer + ?Sized,
    R: Rng + ?Sized,
{
    let range = Range::DEFAULT;
    let dataset = DataGenerator::default()
        .generate(range, rng)
        .map_err(AppError::Generate)?;

    let output_path = config.output.path.clone();
    renderer
        .render_to_file(&dataset, &output_path)
        .map_err(AppError::Render)?;

    info!(
        renderer = renderer.name(),
        range = %range,
        points = dataset.len(),
        path = %output_path.display(),
        "run complete"
    );

    Ok(RunSummary {
        output_path,
        point_count: dataset.len(),
    })
}
