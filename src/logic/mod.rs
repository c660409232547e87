//! Core logic: workout encoding and weight prediction

pub mod features;
pub mod model;
