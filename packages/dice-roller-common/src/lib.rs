pub mod derive;
pub mod params;

pub use derive::derive_outcome;
pub use params::{ParamsError, RollParams};
