pub mod api_error;
pub mod api_utils;
pub mod collection;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod fetch_state;
pub mod icons;
