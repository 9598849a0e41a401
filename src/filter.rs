//! Filter selection, parameter collection and dispatch.

mod apply;
mod error;
mod kind;
mod params;


pub use apply::apply_filter;
pub use error::{FilterError, FilterResult};
pub use kind::FilterKind;
pub use params::{FilterParameters, FlipCode, MAX_ANGLE, ParameterInputs, collect_parameters};
