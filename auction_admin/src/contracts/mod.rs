pub mod artifact;
pub mod auction;
