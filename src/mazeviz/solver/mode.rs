/// Animation pacing of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Free-running; one solver step per frame.
    Solving,
    /// One solver step per explicit next trigger.
    Stepping,
    /// No active search.
    #[default]
    Stopped,
}
