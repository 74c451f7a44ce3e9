use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::{generator, validator, writer};

/// What the front end tells the user once an action finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved { path: PathBuf },
    Failed { message: String },
}

impl Notice {
    pub fn from_result(result: &Result<PathBuf>) -> Self {
        match result {
            Ok(path) => Notice::Saved { path: path.clone() },
            Err(err) => Notice::Failed {
                message: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Saved { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Saved { path } => write!(f, "Passwords saved to {}", path.display()),
            Notice::Failed { message } => write!(f, "Error: {}", message),
        }
    }
}

/// Validate, generate, write. The first failing stage aborts the rest.
pub fn run(length_input: &str, count_input: &str, destination: &Path) -> Result<PathBuf> {
    let request = validator::validate(length_input, count_input)?;
    tracing::info!(
        length = request.length(),
        count = request.count(),
        "generating passwords"
    );

    let batch = generator::generate_batch(&request);
    writer::write(&batch, destination)?;
    drop(batch);

    tracing::info!(path = %destination.display(), "passwords saved");
    Ok(destination.to_path_buf())
}
