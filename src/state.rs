/// Demo application state
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Enable debug overlay
    pub debug: bool,
    /// Simulation paused
    pub paused: bool,
    /// Exit requested
    pub quit: bool,
}
