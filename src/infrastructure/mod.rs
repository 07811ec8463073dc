pub mod mock;
pub mod smartcore_model;
