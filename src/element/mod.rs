pub mod classifier;
pub mod element_model;
pub mod keywords;
pub mod locator;
pub mod naming;
pub mod sanitizer;
