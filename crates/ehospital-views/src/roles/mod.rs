//! One page builder per dashboard role.
//!
//! Each builder returns the ordered panels of its page. Builders for pages
//! with generated charts take the `Dashboard` so they can reach its presets
//! and series source.

pub mod analytics;
pub mod clinical_staff;
pub mod doctor;
pub mod home;
pub mod patient;
