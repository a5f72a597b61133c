use crossbeam::channel::{unbounded, Receiver};
use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::{CentralPanel, Context, Key, Layout, TopBottomPanel, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mazeviz::Bus;
use widgets::Theme;
use windows::{AppWindow, BuffWriter, Debug, Pathfinder};

mod mazeviz;
mod widgets;
mod windows;

struct MazevizApp {
    windows: Vec<Box<dyn AppWindow>>,
    theme: Theme,
}

impl MazevizApp {
    fn new(_ctx: &CreationContext<'_>, log_receiver: Receiver<Vec<u8>>) -> Self {
        info!("creating app...");

        let bus = Bus::new();

        Self {
            windows: vec![
                Box::new(Pathfinder::new(bus, true)),
                Box::new(Debug::new(log_receiver, false)),
            ],
            theme: Theme::new(),
        }
    }
}

impl App for MazevizApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        if ctx.input().key_pressed(Key::Escape) {
            info!("escape pressed; closing...");
            frame.close();
        }

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.with_layout(Layout::left_to_right(egui::Align::Center), |ui| {
                ui.add(&mut self.theme);

                self.windows.iter_mut().for_each(|w| {
                    w.as_mut().toggle_btn(ui);
                });
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            self.windows.iter_mut().for_each(|w| w.show(ui));
        });
    }
}

fn main() {
    let (s, r) = unbounded();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(move || BuffWriter::new(s.clone()))
        .init();

    run_native(
        "mazeviz",
        NativeOptions {
            initial_window_size: Some(Vec2::new(800.0, 700.0)),
            ..Default::default()
        },
        Box::new(|cc| Box::new(MazevizApp::new(cc, r))),
    );
}
