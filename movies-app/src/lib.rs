pub mod domain;
pub mod validation;
