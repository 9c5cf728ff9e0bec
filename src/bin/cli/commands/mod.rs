pub mod levels;
pub mod reset;
pub mod status;
