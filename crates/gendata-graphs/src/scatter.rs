//! Scatter plot of generated data points.

use crate::table::dataset_from_value;
use crate::traits::GraphRenderer;
use crate::utils::{calculate_data_ranges, parse_color, OutputFormat};
use gendata_common::{GenDataError, Result};
use gendata_config::{Config, StyleConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use gendata_points::Dataset;
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Chart caption.
pub const TITLE: &str = "Data Points";
/// Horizontal axis description.
pub const X_LABEL: &str = "x";
/// Vertical axis description.
pub const Y_LABEL: &str = "f(x)";

/// Renders a dataset as a scatter plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterPlotRenderer {
    width: u32,
    height: u32,
    style: StyleConfig,
}

impl ScatterPlotRenderer {
    /// Creates a renderer sized and styled from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.output.width,
            height: config.output.height,
            style: config.style.clone(),
        }
    }

    /// Creates a renderer with explicit dimensions and style.
    #[must_use]
    pub const fn with_style(width: u32, height: u32, style: StyleConfig) -> Self {
        Self {
            width,
            height,
            style,
        }
    }

    /// Image dimensions in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Validates an untyped table and renders it to `path`.
    pub fn render_value(&self, value: &Value, path: &Path) -> Result<()> {
        let dataset = dataset_from_value(value)?;
        self.render_to_file(&dataset, path)
    }

    /// Renders the dataset as an SVG document.
    pub fn render_svg_string(&self, dataset: &Dataset) -> Result<String> {
        ensure_not_empty(dataset)?;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.dimensions()).into_drawing_area();
            self.draw(&root, dataset)?;
        }
        Ok(svg)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, dataset: &Dataset) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let background = parse_color(&self.style.background_color)?;
        let point_color = parse_color(&self.style.point_color)?;
        let family = self.style.font_family.as_str();

        root.fill(&background)?;

        let (x_range, y_range) = calculate_data_ranges(dataset);
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (family, f64::from(self.style.title_font_size)))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .axis_desc_style((family, f64::from(self.style.label_font_size)));
        if !self.style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let size = self.style.point_size;
        #[allow(clippy::cast_precision_loss)]
        let markers = dataset
            .iter()
            .map(|p| Circle::new((p.x as f64, p.y), size, point_color.filled()));
        chart.draw_series(markers)?;

        root.present()?;
        Ok(())
    }
}

impl Default for ScatterPlotRenderer {
    fn default() -> Self {
        Self::with_style(DEFAULT_WIDTH, DEFAULT_HEIGHT, StyleConfig::default())
    }
}

impl GraphRenderer for ScatterPlotRenderer {
    fn render_to_file(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        ensure_not_empty(dataset)?;
        let format = OutputFormat::from_path(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            OutputFormat::Png => {
                let root = BitMapBackend::new(path, self.dimensions()).into_drawing_area();
                self.draw(&root, dataset)?;
            }
            OutputFormat::Svg => {
                let root = SVGBackend::new(path, self.dimensions()).into_drawing_area();
                self.draw(&root, dataset)?;
            }
        }

        info!(
            path = %path.display(),
            points = dataset.len(),
            format = ?format,
            "rendered scatter plot"
        );
        Ok(())
    }

    fn render_to_bytes(&self, dataset: &Dataset) -> Result<Vec<u8>> {
        ensure_not_empty(dataset)?;

        let (width, height) = self.dimensions();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw(&root, dataset)?;
        }

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&buffer, width, height, ColorType::Rgb8)
            .map_err(|e| GenDataError::graph_with_source("PNG encoding failed", e))?;

        debug!(bytes = png.len(), "encoded scatter plot");
        Ok(png)
    }

    fn name(&self) -> &'static str {
        "scatter_plot"
    }

    fn description(&self) -> &'static str {
        "Scatter plot of x against f(x)"
    }
}

/// Renders `dataset` to `path` with the default size and style.
pub fn plot_data(dataset: &Dataset, path: &Path) -> Result<()> {
    ScatterPlotRenderer::default().render_to_file(dataset, path)
}

fn ensure_not_empty(dataset: &Dataset) -> Result<()> {
    if dataset.is_empty() {
        Err(GenDataError::invalid_input("no data points to plot"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gendata_points::{generate_seeded, DataPoint, Range};

    fn small_dataset() -> Dataset {
        Dataset::from_points(vec![
            DataPoint::new(1, 1.2),
            DataPoint::new(4, 7.9),
            DataPoint::new(9, 27.3),
        ])
    }

    #[test]
    fn test_renderer_metadata() {
        let renderer = ScatterPlotRenderer::default();
        assert_eq!(renderer.name(), "scatter_plot");
        assert!(!renderer.description().is_empty());
        assert_eq!(renderer.dimensions(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn test_new_takes_output_and_style_from_config() {
        let mut config = Config::default();
        config.output.width = 320;
        config.output.height = 240;
        config.style.show_grid = false;

        let renderer = ScatterPlotRenderer::new(&config);
        assert_eq!(renderer.dimensions(), (320, 240));
        assert_eq!(renderer.style, config.style);
    }

    #[test]
    fn test_svg_contains_title_and_labels() {
        let svg = ScatterPlotRenderer::default()
            .render_svg_string(&small_dataset())
            .unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(TITLE));
        assert!(svg.contains(Y_LABEL));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_render_to_bytes_is_png() {
        let dataset = generate_seeded(Range::DEFAULT, 5).unwrap();
        let style = StyleConfig::default();
        let png = ScatterPlotRenderer::with_style(200, 150, style)
            .render_to_bytes(&dataset)
            .unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_empty_dataset_is_invalid_input() {
        let renderer = ScatterPlotRenderer::default();
        let err = renderer.render_to_bytes(&Dataset::default()).unwrap_err();
        assert!(matches!(err, GenDataError::InvalidInput { .. }));

        let err = renderer.render_svg_string(&Dataset::default()).unwrap_err();
        assert!(matches!(err, GenDataError::InvalidInput { .. }));
    }

    #[test]
    fn test_bad_style_color_is_graph_error() {
        let mut style = StyleConfig::default();
        style.point_color = "blue".to_string();
        let err = ScatterPlotRenderer::with_style(200, 150, style)
            .render_svg_string(&small_dataset())
            .unwrap_err();
        assert!(matches!(err, GenDataError::Graph { .. }));
    }
}
