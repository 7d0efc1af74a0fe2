use thiserror::Error;

use crate::model::CatalogError;
use crate::model::TaskError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TaskValidation(#[from] TaskError),
    #[error(transparent)]
    CatalogValidation(#[from] CatalogError),
}
