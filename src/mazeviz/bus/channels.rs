pub const CONTROLS: &str = "controls";

pub const ALL: [&str; 1] = [CONTROLS];
