mod angle;
pub mod hit_testing;

pub use angle::Angle;
