use std::ops::Range;
use std::path::Path;

use log::info;
use ndarray::{Array1, Array2};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::{GdError, Result};

const SIZE: (u32, u32) = (800, 600);
const GRID: usize = 50;

fn plot_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> GdError {
    GdError::Plot(err.to_string())
}

fn prepare(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Range covering every finite value with a 5% margin on both sides.
fn bounds<'a, I: IntoIterator<Item = &'a f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if min > max {
        return 0.0..1.0;
    }
    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}

/// Training points and the model's predictions against the single feature.
pub fn scatter_with_fit<P: AsRef<Path>>(
    path: P,
    title: &str,
    x: &Array1<f64>,
    y: &Array1<f64>,
    predictions: &Array1<f64>,
) -> Result<()> {
    let path = path.as_ref();
    prepare(path)?;

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds(x), bounds(y.iter().chain(predictions.iter())))
        .map_err(plot_err)?;
    chart.configure_mesh().draw().map_err(plot_err)?;

    chart
        .draw_series(
            x.iter()
                .zip(y.iter())
                .map(|(&xi, &yi)| Cross::new((xi, yi), 5, RED)),
        )
        .map_err(plot_err)?
        .label("Actual")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    let mut fitted: Vec<(f64, f64)> = x.iter().copied().zip(predictions.iter().copied()).collect();
    fitted.sort_by(|a, b| a.0.total_cmp(&b.0));
    chart
        .draw_series(LineSeries::new(fitted, BLUE))
        .map_err(plot_err)?
        .label("Prediction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn line_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, caption: &str, points: &[(f64, f64)]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(bounds(&xs), bounds(&ys))
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc("iteration step")
        .y_desc("Cost")
        .draw()
        .map_err(plot_err)?;
    chart
        .draw_series(LineSeries::new(points.iter().copied(), BLUE))
        .map_err(plot_err)?;
    Ok(())
}

/// Cost per iteration: the first 100 iterations on the left, the tail of
/// the run on the right.
pub fn cost_history<P: AsRef<Path>>(path: P, title: &str, costs: &[f64]) -> Result<()> {
    let path = path.as_ref();
    prepare(path)?;

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let root = root.titled(title, ("sans-serif", 24)).map_err(plot_err)?;
    let (left, right) = root.split_horizontally(SIZE.0 / 2);

    let points: Vec<(f64, f64)> = costs
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as f64, c))
        .collect();
    let head = &points[..points.len().min(100)];
    let tail_start = if points.len() > 1000 { 1000 } else { points.len() / 2 };
    let tail = &points[tail_start..];

    line_panel(&left, "Cost vs. iteration (start)", head)?;
    line_panel(&right, "Cost vs. iteration (end)", tail)?;

    root.present().map_err(plot_err)?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Probability surface of a two feature classifier with the labeled points
/// on top. `probability` receives grid points in the units of `x`.
pub fn decision_surface<P, F>(
    path: P,
    title: &str,
    x: &Array2<f64>,
    y: &Array1<f64>,
    probability: F,
) -> Result<()>
where
    P: AsRef<Path>,
    F: Fn(&Array2<f64>) -> Array2<f64>,
{
    let path = path.as_ref();
    prepare(path)?;

    let x_range = bounds(x.column(0));
    let y_range = bounds(x.column(1));
    let x_step = (x_range.end - x_range.start) / GRID as f64;
    let y_step = (y_range.end - y_range.start) / GRID as f64;

    let grid = Array2::from_shape_fn((GRID * GRID, 2), |(k, j)| match j {
        0 => x_range.start + (k / GRID) as f64 * x_step,
        _ => y_range.start + (k % GRID) as f64 * y_step,
    });
    let p = probability(&grid);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_desc("Temperature (Celsius)")
        .y_desc("Duration (minutes)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(grid.rows().into_iter().zip(p.iter()).map(|(point, &prob)| {
            let shade = (255.0 * (1.0 - prob.clamp(0.0, 1.0))) as u8;
            Rectangle::new(
                [(point[0], point[1]), (point[0] + x_step, point[1] + y_step)],
                RGBColor(255, shade, shade).mix(0.6).filled(),
            )
        }))
        .map_err(plot_err)?;

    let labeled: Vec<(f64, f64, bool)> = x
        .rows()
        .into_iter()
        .zip(y.iter())
        .map(|(row, &label)| (row[0], row[1], label == 1.0))
        .collect();
    chart
        .draw_series(
            labeled
                .iter()
                .filter(|p| p.2)
                .map(|&(t, d, _)| Circle::new((t, d), 4, RED.filled())),
        )
        .map_err(plot_err)?;
    chart
        .draw_series(
            labeled
                .iter()
                .filter(|p| !p.2)
                .map(|&(t, d, _)| Cross::new((t, d), 4, BLUE)),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_bounds_pads_range() {
        let range = bounds(&[0.0, 10.0]);
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_degenerate() {
        assert_eq!(bounds(&[3.0]), 2.0..4.0);
        let empty: [f64; 0] = [];
        assert_eq!(bounds(&empty), 0.0..1.0);
        assert_eq!(bounds(&[f64::NAN, 1.0]), 0.0..2.0);
    }

    #[test]
    fn test_scatter_with_fit_writes_svg() {
        let dir = std::env::temp_dir().join("gdlab-plot-test");
        let path = dir.join("fit.svg");
        let x = array![1.0, 2.0];
        let y = array![300.0, 500.0];

        scatter_with_fit(&path, "Housing Prices", &x, &y, &y).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_cost_history_writes_svg() {
        let path = std::env::temp_dir().join("gdlab-plot-test").join("cost.svg");
        let costs: Vec<f64> = (0..2000).map(|i| 1.0 / (1.0 + i as f64)).collect();

        cost_history(&path, "Cost", &costs).unwrap();
        assert!(path.exists());
    }
}
