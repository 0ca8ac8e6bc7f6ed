pub mod error;
pub mod geo;
pub mod matcher;
pub mod points_csv;
pub mod wire;
