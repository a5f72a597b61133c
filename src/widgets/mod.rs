mod maze_view;
mod open_drop_file;
mod theme;
mod widget;

pub use self::maze_view::MazeView;
pub use self::open_drop_file::OpenDropFile;
pub use self::theme::Theme;
pub use self::widget::AppWidget;
