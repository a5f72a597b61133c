mod debug;
mod pathfinder;
mod window;

pub use self::debug::{BuffWriter, Debug};
pub use self::pathfinder::Pathfinder;
pub use self::window::AppWindow;
