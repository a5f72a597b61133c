use egui::{Response, Visuals, Widget};

static LIGHT_MODE_SYMBOL: &str = "🔆";
static DARK_MODE_SYMBOL: &str = "🌙";

pub struct Theme {
    dark_mode: bool,
}

impl Theme {
    pub fn new() -> Self {
        Self { dark_mode: true }
    }

    fn symbol(&self) -> &'static str {
        if self.dark_mode {
            LIGHT_MODE_SYMBOL
        } else {
            DARK_MODE_SYMBOL
        }
    }
}

impl Widget for &mut Theme {
    fn ui(self, ui: &mut egui::Ui) -> Response {
        ui.ctx().set_visuals(match self.dark_mode {
            true => Visuals::dark(),
            false => Visuals::light(),
        });

        let btn = ui.button(self.symbol());
        if btn.clicked() {
            self.dark_mode = !self.dark_mode
        };

        btn
    }
}
