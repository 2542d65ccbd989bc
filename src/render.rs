use crate::chart::{moving_average, Block, RUNNING_AVG_WINDOW};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::{error::Error, path::Path};

/// Renders one log block as a four-panel SVG: raw scores, their running
/// average, raw steps, their running average.
pub fn render_block(path: &Path, block: &Block) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1600, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 4));
    draw_panel(&panels[0], "Scores", &block.scores)?;
    draw_panel(
        &panels[1],
        "Running Avg 50 of Score",
        &moving_average(&block.scores, RUNNING_AVG_WINDOW),
    )?;
    draw_panel(&panels[2], "Steps", &block.steps)?;
    draw_panel(
        &panels[3],
        "Running Avg 50 of Steps",
        &moving_average(&block.steps, RUNNING_AVG_WINDOW),
    )?;

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    series: &[f64],
) -> Result<(), Box<dyn Error>> {
    let x_max = series.len().max(1) as f64;
    let (mut y_min, mut y_max) = series.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    );
    // empty or constant series still get a drawable axis range
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }

    let mut panel = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(44)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;
    panel.configure_mesh().draw()?;
    panel.draw_series(LineSeries::new(
        series.iter().enumerate().map(|(i, &v)| (i as f64, v)),
        &BLUE,
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn renders_a_small_block() {
        let path = env::temp_dir().join("halite_bot_render_small.svg");
        let block = Block {
            scores: vec![1.0, 2.0, 1.5],
            steps: vec![30.0, 40.0],
        };
        render_block(&path, &block).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn renders_an_empty_block() {
        let path = env::temp_dir().join("halite_bot_render_empty.svg");
        render_block(&path, &Block::default()).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
        fs::remove_file(&path).unwrap();
    }
}
