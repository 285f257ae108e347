//! Algorithm implementations for health risk assessment
//!
//! This module contains the scoring engine and the pipeline that turns its
//! scores into a full assessment.

pub mod risk;
