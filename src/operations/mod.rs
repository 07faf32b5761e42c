pub mod creation;
pub mod haunch;
pub mod offset;
pub mod query;
pub mod shaping;
