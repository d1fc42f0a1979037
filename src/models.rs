pub mod place;
pub mod plan;
