use egui::{CursorIcon, FontSelection, Sense, TextEdit, TextStyle};
use tracing::debug;

use super::AppWidget;

const HINT: &str = "Drop a maze .txt file here or click to open a file dialog";

/// Accepts a maze file by drag-and-drop or through a native file dialog.
/// The chosen path is handed out once via [`OpenDropFile::path`].
#[derive(Default)]
pub struct OpenDropFile {
    file_path: Option<String>,
}

impl OpenDropFile {
    pub fn path(&mut self) -> Option<String> {
        let path = self.file_path.take();
        if path.is_some() {
            debug!("handing out picked file path: {path:?}");
        }

        path
    }

    fn update(&mut self, file_path: String) {
        if !file_path.is_empty() {
            self.file_path = Some(file_path.clone());
            debug!("file path updated: {file_path:?}");
        }
    }
}

impl AppWidget for OpenDropFile {
    fn show(&mut self, ui: &mut egui::Ui) {
        let mut file_path = "".to_string();

        let mut text = HINT.to_string();
        if let Some(hovered) = ui.ctx().input().raw.hovered_files.last() {
            if let Some(path) = hovered.path.clone() {
                text = format!("Dropping file: {:?}", path.file_name().unwrap_or_default());
            }
        }

        let response = ui
            .add(
                TextEdit::multiline(&mut "")
                    .interactive(false)
                    .desired_rows(2)
                    .font(FontSelection::Style(TextStyle::Body))
                    .hint_text(text),
            )
            .on_hover_cursor(CursorIcon::PointingHand)
            .interact(Sense::click());

        if response.clicked() {
            debug!("opening file dialog");
            if let Some(opened_path) = rfd::FileDialog::new()
                .add_filter("Text files", &["txt"])
                .pick_file()
            {
                file_path = opened_path.display().to_string();
            }
        }

        if let Some(dropped) = ui.ctx().input().raw.dropped_files.last() {
            if let Some(path) = dropped.path.clone() {
                file_path = path.display().to_string();
            }
        }

        self.update(file_path);
    }
}
