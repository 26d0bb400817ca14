pub mod a001_model;
pub mod a002_experiment;
pub mod common;
