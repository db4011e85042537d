pub mod clock;
pub mod hub;
