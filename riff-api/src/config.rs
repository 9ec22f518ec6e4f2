//! API 层配置
//!
//! 全局单例（供 CLI 使用）；库调用方应显式传入配置

use once_cell::sync::OnceCell;
use riff_config::PlaygroundConfig;

use crate::error::ApiError;

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<PlaygroundConfig> = OnceCell::new();

/// Initialize global configuration (once per process)
pub fn init(config: PlaygroundConfig) -> Result<(), ApiError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| ApiError::AlreadyInitialized)
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static PlaygroundConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Get global config reference if initialized
pub fn try_config() -> Option<&'static PlaygroundConfig> {
    GLOBAL_CONFIG.get()
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
