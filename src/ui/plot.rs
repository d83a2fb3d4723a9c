use eframe::egui::{self, Color32, RichText, Ui, Vec2};
use egui_plot::{
    Bar, BarChart, HLine, LineStyle, MarkerShape, Plot, PlotBounds, PlotPoints, PlotUi, Points,
    VLine,
};

use crate::chart::surface::{Artist, ChartSurface, GridLines, Layer, Legend, LineKind};

/// Approximate number of grid lines per axis.
const GRID_TARGET_LINES: usize = 8;
const GRID_LINE_WIDTH: f32 = 0.8;

// ---------------------------------------------------------------------------
// Chart surface rendering
// ---------------------------------------------------------------------------

/// Render a [`ChartSurface`]: title, legend row, then the plot itself.
pub fn chart_surface(ui: &mut Ui, id: &str, surface: &ChartSurface) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(&surface.title.text)
                .heading()
                .color(surface.title.color),
        );
    });
    if let Some(legend) = &surface.legend {
        legend_row(ui, legend);
    }
    ui.add_space(4.0);

    ui.scope(|ui: &mut Ui| {
        // egui_plot paints tick labels with the text colour and the frame
        // with the non-interactive widget stroke.
        let visuals = ui.visuals_mut();
        visuals.override_text_color = Some(surface.tick_color);
        visuals.widgets.noninteractive.bg_stroke.color = surface.frame_color;

        Plot::new(id)
            .x_axis_label(RichText::new(&surface.x_label.text).color(surface.x_label.color))
            .y_axis_label(RichText::new(&surface.y_label.text).color(surface.y_label.color))
            .show_grid(false)
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true)
            .show(ui, |plot_ui| {
                let bounds = grid_extent(&plot_ui.plot_bounds(), surface);
                draw_grids(plot_ui, surface, bounds, Layer::BelowData);

                for container in &surface.containers {
                    let bars: Vec<Bar> = container
                        .bars
                        .iter()
                        .map(|b| {
                            Bar::new(b.center(), b.height)
                                .width(b.width)
                                .fill(b.face.gamma_multiply(b.alpha))
                                .stroke(egui::Stroke::new(1.0, b.edge))
                        })
                        .collect();
                    let mut chart = BarChart::new(bars);
                    if let Some(label) = &container.label {
                        chart = chart.name(label);
                    }
                    plot_ui.bar_chart(chart);
                }

                for artist in &surface.artists {
                    draw_artist(plot_ui, artist);
                }

                draw_grids(plot_ui, surface, bounds, Layer::AboveData);
            });
    });
}

fn draw_artist(plot_ui: &mut PlotUi, artist: &Artist) {
    match artist {
        Artist::Scatter {
            points,
            radius,
            alpha,
            label,
        } => {
            // egui_plot colours a point series as a whole, so split by colour
            let mut groups: Vec<(Color32, Vec<[f64; 2]>)> = Vec::new();
            for p in points {
                match groups.iter_mut().find(|(c, _)| *c == p.color) {
                    Some((_, pts)) => pts.push([p.x, p.y]),
                    None => groups.push((p.color, vec![[p.x, p.y]])),
                }
            }
            for (color, pts) in groups {
                let mut series = Points::new(PlotPoints::new(pts))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(*radius)
                    .color(color.gamma_multiply(*alpha));
                if let Some(label) = label {
                    series = series.name(label);
                }
                plot_ui.points(series);
            }
        }
        Artist::HLine(line) => {
            let mut h = HLine::new(line.position)
                .color(line.color.gamma_multiply(line.alpha))
                .width(line.width)
                .style(line_style(line.kind));
            if let Some(label) = &line.label {
                h = h.name(label);
            }
            plot_ui.hline(h);
        }
        Artist::VLine(line) => {
            let mut v = VLine::new(line.position)
                .color(line.color.gamma_multiply(line.alpha))
                .width(line.width)
                .style(line_style(line.kind));
            if let Some(label) = &line.label {
                v = v.name(label);
            }
            plot_ui.vline(v);
        }
    }
}

/// Area to cover with grid lines: what is on screen, or the data extent
/// before the plot has settled on bounds.
fn grid_extent(visible: &PlotBounds, surface: &ChartSurface) -> Option<([f64; 2], [f64; 2])> {
    if visible.is_valid() {
        Some((visible.min(), visible.max()))
    } else {
        surface.data_bounds()
    }
}

fn draw_grids(
    plot_ui: &mut PlotUi,
    surface: &ChartSurface,
    bounds: Option<([f64; 2], [f64; 2])>,
    layer: Layer,
) {
    let Some((min, max)) = bounds else {
        return;
    };
    let on_layer = |grid: Option<GridLines>| grid.filter(|g| g.layer == layer);

    if let Some(grid) = on_layer(surface.x_grid) {
        let color = grid.color.gamma_multiply(grid.alpha);
        for x in nice_ticks(min[0], max[0], GRID_TARGET_LINES) {
            plot_ui.vline(
                VLine::new(x)
                    .color(color)
                    .width(GRID_LINE_WIDTH)
                    .style(line_style(grid.kind)),
            );
        }
    }
    if let Some(grid) = on_layer(surface.y_grid) {
        let color = grid.color.gamma_multiply(grid.alpha);
        for y in nice_ticks(min[1], max[1], GRID_TARGET_LINES) {
            plot_ui.hline(
                HLine::new(y)
                    .color(color)
                    .width(GRID_LINE_WIDTH)
                    .style(line_style(grid.kind)),
            );
        }
    }
}

fn line_style(kind: LineKind) -> LineStyle {
    match kind {
        LineKind::Solid => LineStyle::Solid,
        LineKind::Dashed => LineStyle::dashed_loose(),
    }
}

// ---------------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------------

/// Swatch + text per entry, wrapped across the width of the chart.
fn legend_row(ui: &mut Ui, legend: &Legend) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for entry in &legend.entries {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(16.0, 10.0), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 1.0, entry.swatch.edge);
            painter.rect_filled(rect.shrink(1.0), 1.0, entry.swatch.face);
            ui.label(RichText::new(&entry.text).color(entry.text_color));
            ui.add_space(8.0);
        }
    });
}

// ---------------------------------------------------------------------------
// Tick placement
// ---------------------------------------------------------------------------

/// Round tick positions (1, 2 or 5 × 10ⁿ apart) covering `min..=max`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return if min.is_finite() { vec![min] } else { Vec::new() };
    }

    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = magnitude
        * match raw / magnitude {
            n if n < 1.5 => 1.0,
            n if n < 3.0 => 2.0,
            n if n < 7.0 => 5.0,
            _ => 10.0,
        };

    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
