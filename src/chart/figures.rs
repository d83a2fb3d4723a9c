use super::histogram::Histogram;
use super::style::{apply_graph_styling, StyleOptions};
use super::surface::{BarPatch, ChartSurface, ReferenceLine, ScatterPoint};
use crate::config::AnalysisConfig;
use crate::report::AnalysisReport;

/// Text in the reference colour, dashed y-grid in the palette's grid colour.
fn house_style(config: &AnalysisConfig) -> StyleOptions {
    StyleOptions {
        text_color: config.palette.reference,
        grid_color: config.palette.grid,
        grid_on_y: true,
        ..StyleOptions::default()
    }
}

// ---------------------------------------------------------------------------
// Scatter: every measurement against its row index
// ---------------------------------------------------------------------------

pub fn scatter_figure(report: &AnalysisReport<'_>, config: &AnalysisConfig) -> ChartSurface {
    let t = report.threshold();
    let palette = &config.palette;
    let group_color = |value: f64| {
        if report.partition.is_below(value) {
            palette.below
        } else {
            palette.above
        }
    };

    let mut surface = ChartSurface::new();

    let points = report
        .table
        .rows
        .iter()
        .enumerate()
        .map(|(i, m)| ScatterPoint {
            x: i as f64,
            y: m.value,
            color: group_color(m.value),
        })
        .collect();
    surface.scatter(points, config.marker_radius, config.marker_alpha, None);

    surface.axhline(
        ReferenceLine::new(t, palette.reference)
            .dashed()
            .width(config.line_width)
            .label(format!("{t}mm threshold")),
    );
    if let Some(below) = &report.below {
        surface.axhline(
            ReferenceLine::new(below.mean, palette.below)
                .width(config.line_width)
                .alpha(config.mean_line_alpha)
                .label(format!("Avg below {t}mm: {:.3}mm", below.mean)),
        );
    }
    if let Some(above) = &report.above {
        surface.axhline(
            ReferenceLine::new(above.mean, palette.above)
                .width(config.line_width)
                .alpha(config.mean_line_alpha)
                .label(format!("Avg above {t}mm: {:.3}mm", above.mean)),
        );
    }

    surface.set_x_label("Measurement Index");
    surface.set_y_label("Diameter (mm)");
    surface.set_title(format!(
        "Diameter Measurements with {t}mm Threshold Analysis"
    ));
    surface.legend();

    apply_graph_styling(&mut surface, &house_style(config));
    surface
}

// ---------------------------------------------------------------------------
// Histogram: distribution of all diameters
// ---------------------------------------------------------------------------

pub fn histogram_figure(report: &AnalysisReport<'_>, config: &AnalysisConfig) -> ChartSurface {
    let t = report.threshold();
    let palette = &config.palette;
    // Dutch labels on this chart, as in the reports it is pasted into.
    let t_comma = format!("{t}").replace('.', ",");

    let mut surface = ChartSurface::new();

    let hist = Histogram::compute(&report.table.values(), config.histogram_bins);
    let width = hist.bin_width();
    let bars = hist
        .bins()
        .map(|(left, count)| BarPatch {
            left,
            width,
            height: count as f64,
            face: palette.above,
            edge: palette.reference,
            alpha: config.histogram_alpha,
        })
        .collect();
    surface.bar_container(None, bars, Some(palette.above));

    // colour each bin by which side of the threshold its left edge is on
    for bar in &mut surface.containers[0].bars {
        bar.face = if report.partition.is_below(bar.left) {
            palette.below
        } else {
            palette.above
        };
    }

    surface.axvline(
        ReferenceLine::new(t, palette.reference)
            .dashed()
            .width(config.line_width)
            .label(format!("{t}mm drempelwaarde")),
    );
    if let Some(overall) = &report.overall {
        surface.axvline(
            ReferenceLine::new(overall.mean, palette.overall)
                .width(config.line_width)
                .label(format!("Globaal gem.: {:.3} mm", overall.mean)),
        );
    }
    if let Some(below) = &report.below {
        surface.axvline(
            ReferenceLine::new(below.mean, palette.below)
                .width(config.line_width)
                .label(format!("Gem. onder {t_comma} mm: {:.3} mm", below.mean)),
        );
    }
    if let Some(above) = &report.above {
        surface.axvline(
            ReferenceLine::new(above.mean, palette.above)
                .width(config.line_width)
                .label(format!("Gem. boven {t_comma} mm: {:.3} mm", above.mean)),
        );
    }

    surface.set_x_label("Diameter (mm)");
    surface.set_y_label("Frequentie");
    surface.set_title("Distributie v.d. gemeten diameters");
    surface.legend();

    apply_graph_styling(&mut surface, &house_style(config));
    surface
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::{Artist, LineKind};
    use crate::data::model::MeasurementTable;

    fn sample() -> MeasurementTable {
        MeasurementTable::from_pairs([("a", 0.4), ("b", 0.6), ("c", 0.65), ("d", 0.55)])
    }

    fn legend_texts(s: &ChartSurface) -> Vec<String> {
        s.legend
            .as_ref()
            .unwrap()
            .entries
            .iter()
            .map(|e| e.text.clone())
            .collect()
    }

    #[test]
    fn scatter_colors_points_by_group() {
        let table = sample();
        let cfg = AnalysisConfig::new().unwrap();
        let report = AnalysisReport::build(&table, &cfg);
        let s = scatter_figure(&report, &cfg);

        let Artist::Scatter { points, .. } = &s.artists[0] else {
            panic!("first artist should be the scatter");
        };
        let colors: Vec<_> = points.iter().map(|p| p.color).collect();
        let p = cfg.palette;
        assert_eq!(colors, vec![p.below, p.above, p.above, p.below]);
        assert_eq!(points[2].x, 2.0);

        assert_eq!(
            legend_texts(&s),
            [
                "0.6mm threshold",
                "Avg below 0.6mm: 0.475mm",
                "Avg above 0.6mm: 0.625mm",
            ]
        );
        assert_eq!(s.y_grid.map(|g| g.color), Some(cfg.palette.grid));
        assert_eq!(s.title.color, cfg.palette.reference);
    }

    #[test]
    fn scatter_skips_mean_line_of_empty_group() {
        let table = MeasurementTable::from_pairs([("a", 0.7), ("b", 0.8)]);
        let cfg = AnalysisConfig::new().unwrap();
        let report = AnalysisReport::build(&table, &cfg);
        let s = scatter_figure(&report, &cfg);

        let hlines: Vec<&Artist> = s
            .artists
            .iter()
            .filter(|a| matches!(a, Artist::HLine(_)))
            .collect();
        assert_eq!(hlines.len(), 2);
        assert!(legend_texts(&s).iter().all(|t| !t.contains("below")));
    }

    #[test]
    fn histogram_bins_are_colored_by_left_edge() {
        let table = sample();
        let cfg = AnalysisConfig::new().unwrap();
        let report = AnalysisReport::build(&table, &cfg);
        let s = histogram_figure(&report, &cfg);

        let bars = &s.containers[0].bars;
        assert_eq!(bars.len(), cfg.histogram_bins);
        assert_eq!(bars.iter().map(|b| b.height).sum::<f64>(), 4.0);
        for bar in bars {
            let expected = if bar.left < 0.6 {
                cfg.palette.below
            } else {
                cfg.palette.above
            };
            assert_eq!(bar.face, expected);
            assert_eq!(bar.edge, cfg.palette.reference);
        }
    }

    #[test]
    fn histogram_reference_lines() {
        let table = sample();
        let cfg = AnalysisConfig::new().unwrap();
        let report = AnalysisReport::build(&table, &cfg);
        let s = histogram_figure(&report, &cfg);

        assert_eq!(
            legend_texts(&s),
            [
                "0.6mm drempelwaarde",
                "Globaal gem.: 0.550 mm",
                "Gem. onder 0,6 mm: 0.475 mm",
                "Gem. boven 0,6 mm: 0.625 mm",
            ]
        );
        let Artist::VLine(threshold) = &s.artists[0] else {
            panic!("threshold line first");
        };
        assert_eq!(threshold.kind, LineKind::Dashed);
        assert_eq!(threshold.position, 0.6);
        assert_eq!(s.title.text, "Distributie v.d. gemeten diameters");
    }
}
