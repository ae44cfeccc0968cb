// File: src/render.rs
// Chart assembly and image export. All drawing goes through a generic
// `plotters` backend so the PNG, SVG and in-memory renders share one path.
use crate::layout;
use crate::model::Plan;
use crate::palette;
use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::Path;

/// Logical canvas size shared by both output formats.
pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 600;

/// Vertical band reserved for the title and the horizontal legend.
const HEADER_HEIGHT: u32 = 76;

const FONT: &str = "sans-serif";

/// Renders the plan as `gantt_chart.png`-style raster output.
pub fn export_png(plan: &Plan, path: &Path) -> Result<()> {
    log::debug!("Rendering PNG to {}", path.display());
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    draw_chart(&root, plan)?;
    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Renders the plan as an SVG document and writes it to `path`.
pub fn export_svg(plan: &Plan, path: &Path) -> Result<()> {
    log::debug!("Rendering SVG to {}", path.display());
    let svg = render_svg_string(plan)?;
    fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Renders the plan to an in-memory SVG document.
pub fn render_svg_string(plan: &Plan) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        draw_chart(&root, plan)?;
        root.present()?;
    }
    Ok(buf)
}

/// Draws the full chart onto `root`: header (title + legend), axes, task
/// bars with their descriptions, milestone markers and dependency arrows.
pub fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, plan: &Plan) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let (width, _) = root.dim_in_pixel();

    let (header, body) = root.split_vertically(HEADER_HEIGHT);
    draw_header(&header, plan, width)?;

    let rows = plan.rows();
    let (x_min, x_max) = layout::x_range(plan);
    let ticks = layout::week_ticks(plan);
    let row_marks: Vec<f64> = (0..rows).map(|r| r as f64).collect();

    let mut chart = ChartBuilder::on(&body)
        .margin_right(24)
        .margin_bottom(12)
        .x_label_area_size(52)
        .y_label_area_size(118)
        .build_cartesian_2d(
            Labeled((x_min..x_max).with_key_points(ticks)),
            Labeled((-0.5..rows as f64 - 0.5).with_key_points(row_marks)),
        )?;

    let row_label = |y: &f64| -> String {
        // Tick y coordinates are exact row integers; anything else is a
        // spurious key point and gets no label.
        let row = rows as i64 - 1 - y.round() as i64;
        plan.tasks
            .get(row as usize)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Timeline")
        .y_desc("Dev Tracks")
        .x_label_formatter(&|x: &f64| format!("Week {}", x.round() as i64))
        .y_label_formatter(&row_label)
        .label_style((FONT, 14))
        .axis_desc_style((FONT, 16))
        .draw()?;

    // Task bars, one rectangle per task, colored by category.
    chart.draw_series(plan.tasks.iter().enumerate().map(|(row, task)| {
        let (x0, x1) = layout::bar_span(task);
        let y = layout::row_y(row, rows);
        let (r, g, b) = palette::category_rgb(task.category);
        Rectangle::new(
            [
                (x0, y - layout::BAR_HALF_HEIGHT),
                (x1, y + layout::BAR_HALF_HEIGHT),
            ],
            RGBColor(r, g, b).filled(),
        )
    }))?;

    // Description text inside each bar, black or white by bar luminance.
    chart.draw_series(
        plan.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| !task.description.is_empty())
            .map(|(row, task)| {
                let (x0, x1) = layout::bar_span(task);
                let y = layout::row_y(row, rows);
                let (r, g, b) = palette::category_rgb(task.category);
                let ink = if palette::is_dark(r, g, b) { WHITE } else { BLACK };
                let style = (FONT, 12)
                    .into_font()
                    .color(&ink)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                EmptyElement::at(((x0 + x1) / 2.0, y))
                    + Text::new(task.description.clone(), (0, 0), style)
            }),
    )?;

    // Milestone diamonds. `validate()` guarantees every milestone resolves
    // to a row.
    let (mr, mg, mb) = palette::milestone_rgb();
    let fill = RGBColor(mr, mg, mb);
    chart.draw_series(plan.milestones.iter().filter_map(|milestone| {
        let y = layout::row_y(plan.row_of(&milestone.task)?, rows);
        Some(
            EmptyElement::at((milestone.week, y))
                + Polygon::new(diamond(7), fill.filled())
                + PathElement::new(diamond_ring(7), BLACK.stroke_width(1)),
        )
    }))?;

    // Captions above the markers.
    let caption_style = (FONT, 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(plan.milestones.iter().filter_map(|milestone| {
        let y = layout::row_y(plan.row_of(&milestone.task)?, rows);
        Some(
            EmptyElement::at((milestone.week, y))
                + Text::new(milestone.label.clone(), (0, -11), caption_style.clone()),
        )
    }))?;

    // Dependency arrows are drawn in pixel space on the full canvas so the
    // arrowheads keep their size regardless of axis scale.
    for arrow in layout::dependency_arrows(&plan.tasks, rows) {
        let tail = chart.backend_coord(&arrow.tail);
        let head = chart.backend_coord(&arrow.head);
        draw_arrow(root, tail, head)?;
    }

    Ok(())
}

/// Title centered at the top, legend swatches centered below it.
fn draw_header<DB>(area: &DrawingArea<DB, Shift>, plan: &Plan, width: u32) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let title_style = (FONT, 26)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    area.draw(&Text::new(plan.title.clone(), (width as i32 / 2, 10), title_style))?;

    const SWATCH: i32 = 14;
    const ENTRY_GAP: i32 = 28;
    let categories = plan.categories();
    // No text metrics at this point, so approximate label width per glyph.
    let entry_widths: Vec<i32> = categories
        .iter()
        .map(|c| SWATCH + 6 + 8 * c.to_string().len() as i32)
        .collect();
    let total: i32 = entry_widths.iter().sum::<i32>()
        + ENTRY_GAP * categories.len().saturating_sub(1) as i32;

    let mut x = (width as i32 - total) / 2;
    let y = 48;
    let label_style = (FONT, 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (category, entry_width) in categories.iter().zip(entry_widths) {
        let (r, g, b) = palette::category_rgb(*category);
        area.draw(&Rectangle::new(
            [(x, y), (x + SWATCH, y + SWATCH)],
            RGBColor(r, g, b).filled(),
        ))?;
        area.draw(&Text::new(
            category.to_string(),
            (x + SWATCH + 6, y + SWATCH / 2),
            label_style.clone(),
        ))?;
        x += entry_width + ENTRY_GAP;
    }
    Ok(())
}

/// Straight arrow between two backend pixel positions: a shaft plus a solid
/// triangular head at the destination.
fn draw_arrow<DB>(area: &DrawingArea<DB, Shift>, tail: (i32, i32), head: (i32, i32)) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    const HEAD_LEN: f64 = 9.0;
    const HEAD_HALF_WIDTH: f64 = 4.5;

    let (r, g, b) = palette::ARROW_RGB;
    let color = RGBColor(r, g, b).mix(palette::ARROW_OPACITY);

    let dx = f64::from(head.0 - tail.0);
    let dy = f64::from(head.1 - tail.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < f64::EPSILON {
        return Ok(());
    }
    let (ux, uy) = (dx / len, dy / len);

    // The shaft stops at the base of the head so the tip stays crisp.
    let base = (
        f64::from(head.0) - ux * HEAD_LEN,
        f64::from(head.1) - uy * HEAD_LEN,
    );
    let left = (
        (base.0 - uy * HEAD_HALF_WIDTH).round() as i32,
        (base.1 + ux * HEAD_HALF_WIDTH).round() as i32,
    );
    let right = (
        (base.0 + uy * HEAD_HALF_WIDTH).round() as i32,
        (base.1 - ux * HEAD_HALF_WIDTH).round() as i32,
    );
    let base = (base.0.round() as i32, base.1.round() as i32);

    area.draw(&PathElement::new(vec![tail, base], color.stroke_width(2)))?;
    area.draw(&Polygon::new(vec![head, left, right], color.filled()))?;
    Ok(())
}

/// Re-exposes a float key-point coordinate with the `DefaultFormatting`
/// marker so `configure_mesh` (which requires `ValueFormatter`) accepts it;
/// `WithKeyPoints` otherwise inherits `NoDefaultFormatting` and has no
/// formatter. Every method delegates unchanged, and the rendered tick labels
/// come from the explicit `x_label_formatter`/`y_label_formatter`, so this
/// alters no output.
struct Labeled<R>(R);

impl<R> Ranged for Labeled<R>
where
    R: Ranged<ValueType = f64>,
{
    type ValueType = f64;
    type FormatOption = DefaultFormatting;

    fn range(&self) -> std::ops::Range<f64> {
        self.0.range()
    }

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> std::ops::Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

fn diamond(radius: i32) -> Vec<(i32, i32)> {
    vec![(0, -radius), (radius, 0), (0, radius), (-radius, 0)]
}

fn diamond_ring(radius: i32) -> Vec<(i32, i32)> {
    let mut points = diamond(radius);
    points.push((0, -radius));
    points
}
