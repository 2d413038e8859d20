//! HTTP handlers

pub mod auth;
pub mod health;
pub mod properties;
pub mod accommodations;
pub mod site;
pub mod dashboard;
