// ============================================================================
// Logging Setup
// fmt subscriber for binaries and demos (feature = "logging")
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber at `level`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}
