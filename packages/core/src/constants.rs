use std::env;
use std::path::PathBuf;

/// Get the path to the Arbiter directory (~/.arbiter)
pub fn arbiter_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".arbiter")
    } else {
        // Fall back to dirs crate for normal usage
        dirs::home_dir()
            .expect("Unable to get home directory")
            .join(".arbiter")
    }
}

/// Get the path to the catalogue database (~/.arbiter/arbiter.db)
pub fn database_file() -> PathBuf {
    arbiter_dir().join("arbiter.db")
}
