use std::io::Write;
use std::time::Duration;

use crossbeam::channel::{Receiver, Sender};
use egui::{ScrollArea, TextEdit, Ui, Window};
use tracing::info;

use super::AppWindow;

const WINDOW_NAME: &str = "debug";
const MAX_LINES: usize = 500;
const MAX_FRAME_MSGS: usize = 1000;

/// Forwards tracing output into a channel read by the debug window.
pub struct BuffWriter {
    publisher: Sender<Vec<u8>>,
}

impl BuffWriter {
    pub fn new(publisher: Sender<Vec<u8>>) -> Self {
        Self { publisher }
    }
}

impl Write for BuffWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        // receiver may be gone during shutdown; nothing useful to do then
        let _ = self.publisher.send(buf.to_vec());

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Scrollable window with the log tail and a substring filter.
pub struct Debug {
    filter: String,
    buff: Vec<String>,
    receiver: Receiver<Vec<u8>>,
    visible: bool,
}

impl Debug {
    pub fn new(receiver: Receiver<Vec<u8>>, visible: bool) -> Self {
        info!("initing window {WINDOW_NAME}");

        Self {
            receiver,
            visible,
            filter: Default::default(),
            buff: Default::default(),
        }
    }

    fn handle_events(&mut self) {
        let mut got = 0;
        while got < MAX_FRAME_MSGS {
            let data = match self.receiver.recv_timeout(Duration::from_millis(1)) {
                Ok(data) => data,
                Err(_) => break,
            };

            if self.buff.len() >= MAX_LINES {
                self.buff.remove(0);
            }
            self.buff
                .push(String::from_utf8_lossy(data.as_slice()).to_string());
            got += 1;
        }
    }

    fn filtered(&self) -> Vec<&String> {
        let filter = self.filter.to_lowercase();
        self.buff
            .iter()
            .filter(|line| line.to_lowercase().contains(&filter))
            .collect()
    }
}

impl AppWindow for Debug {
    fn toggle_btn(&mut self, ui: &mut Ui) {
        if ui.button(WINDOW_NAME).clicked() {
            self.visible = !self.visible;
        }
    }

    fn show(&mut self, ui: &mut Ui) {
        self.handle_events();

        let mut filter = self.filter.clone();
        let mut visible = self.visible;

        Window::new(WINDOW_NAME)
            .open(&mut visible)
            .show(ui.ctx(), |ui| {
                let filtered = self.filtered();

                ui.horizontal(|ui| {
                    TextEdit::singleline(&mut filter)
                        .hint_text("filter")
                        .show(ui);
                    ui.label(format!("{}/{}", filtered.len(), self.buff.len()));
                });

                ui.add_space(10f32);

                ScrollArea::new([true, true])
                    .stick_to_bottom(true)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        let mut lines = filtered
                            .iter()
                            .map(|line| line.as_str())
                            .collect::<Vec<_>>()
                            .concat();

                        TextEdit::multiline(&mut lines).show(ui);
                    });
            });

        self.filter = filter;
        self.visible = visible;
    }
}
