//! Parameter management types
//!
//! This module provides the parameter store backing the blink controller's
//! [`ParameterProvider`](crate::traits::ParameterProvider), plus the blink
//! parameter definitions.

pub mod blink;
pub mod error;
pub mod storage;

pub use blink::{BlinkParams, BLINK_INTERVAL};
pub use error::ParameterError;
pub use storage::{
    ParamBounds, ParamFlags, ParamMetadata, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN,
};
