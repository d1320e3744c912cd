//! Cart Handlers

pub(crate) mod applicable;
pub(crate) mod apply;
