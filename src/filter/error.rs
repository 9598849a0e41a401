use super::FilterKind;

pub type FilterResult<T> = Result<T, FilterError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Unknown filter: {0:?}")]
    UnknownFilter(String),
    #[error("{0} needs parameters that were not supplied")]
    MissingParameters(FilterKind),
    #[error("{0} cannot be applied to an empty image")]
    EmptyImage(FilterKind),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
