use erp_business::Route;

use crate::{pages, state::State, widgets};

pub struct ErpApp {
    state: State,
}

impl ErpApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for ErpApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Start the visible view's load, then pick up anything that finished
        let repaint_ctx = ctx.clone();
        self.state
            .mount_active_view(move || repaint_ctx.request_repaint());
        self.state.poll_active_view();

        let mut navigate_to: Option<Route> = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if widgets::top_bar(ui, self.state.route(), &self.state.config) {
                    navigate_to = Some(Route::Dashboard);
                }
            });
        });

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(widgets::SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                if let Some(route) = widgets::sidebar(ui, &mut self.state.sidebar) {
                    navigate_to = Some(route);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(route) = pages::show(ui, &mut self.state) {
                    navigate_to = Some(route);
                }
            });
        });

        if let Some(route) = navigate_to {
            self.state.navigate(route);
            ctx.request_repaint();
        }
    }
}
