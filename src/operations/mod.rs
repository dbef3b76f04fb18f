pub mod query;
pub mod shaping;
