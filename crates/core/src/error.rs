use thiserror::Error;

use crate::model::{CourseError, CredentialsError, GenerationError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
