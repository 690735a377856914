pub mod accessorial;
pub mod booking;
pub mod lane;
pub mod miles;
pub mod place;
pub mod region;
