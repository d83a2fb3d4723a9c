use eframe::egui;

use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Scatter chart in the root window, histogram in a second viewport.
pub struct DiameterViewerApp {
    pub state: ViewerState,
}

impl DiameterViewerApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }

    fn histogram_viewport(&mut self, ctx: &egui::Context) {
        let histogram = &self.state.histogram;
        let close_requested = ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("histogram_viewport"),
            egui::ViewportBuilder::default()
                .with_title("Diameter distribution")
                .with_inner_size([1000.0, 600.0]),
            |ctx, class| {
                if matches!(class, egui::ViewportClass::Embedded) {
                    // Backend without multi-viewport support: fall back to
                    // a window inside the root viewport.
                    let mut open = true;
                    egui::Window::new("Diameter distribution")
                        .open(&mut open)
                        .default_size([800.0, 480.0])
                        .show(ctx, |ui| plot::chart_surface(ui, "histogram", histogram));
                    return !open;
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    plot::chart_surface(ui, "histogram", histogram);
                });
                ctx.input(|i| i.viewport().close_requested())
            },
        );

        if close_requested {
            log::debug!("histogram viewport closed");
            self.state.show_histogram = false;
        }
    }
}

impl eframe::App for DiameterViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_surface(ui, "scatter", &self.state.scatter);
        });

        // ---- Second viewport: histogram ----
        if self.state.show_histogram {
            self.histogram_viewport(ctx);
        }
    }
}
