//! Survey selection feature: load the survey list from the backend and let
//! the user pick several by checkbox.

pub mod loader;
pub mod multiple_choice;
pub mod selector;
