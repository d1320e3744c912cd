//! Shared application domain and in-memory storage for the coupons service.

pub mod catalog;
pub mod context;
pub mod domain;
pub mod observer;
