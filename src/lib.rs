//! Semi-automated campsite booking for the Parks Canada reservation site.
//!
//! The human handles login and payment; the tool handles the clicking speed
//! in between. Core selection logic lives in [`models`] and [`selection`] and
//! is pure; everything driving the live site is under [`automation`].

pub mod automation;
pub mod config;
pub mod models;
pub mod notify;
pub mod selection;
