use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(#[from] wf_project::ProjectError),

    #[error("Traverse failed: {0}")]
    Traverse(#[from] wf_traverse::TraverseError),

    #[error("PVT evaluation failed: {0}")]
    Pvt(#[from] wf_pvt::PvtError),

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Refusing to overwrite existing file: {0}")]
    AlreadyExists(PathBuf),
}

pub type AppResult<T> = Result<T, AppError>;
