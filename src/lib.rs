pub mod estimate;
pub mod plot;
