//! Graph renderer trait definitions.

use gendata_common::Result;
use gendata_points::Dataset;
use std::path::Path;

/// Trait for graph renderers that can generate visualizations.
pub trait GraphRenderer {
    /// Renders the dataset to `path`; the extension selects the image format.
    fn render_to_file(&self, dataset: &Dataset, path: &Path) -> Result<()>;

    /// Renders the dataset to encoded PNG bytes.
    fn render_to_bytes(&self, dataset: &Dataset) -> Result<Vec<u8>>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;
}
