use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BenchrunError {
    #[error("Invalid executable: {} (no such file)", path.display())]
    ExecutableNotFound { path: PathBuf },

    #[error("Failed to launch {}: {source}", path.display())]
    SpawnFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
