pub mod booking;
pub mod profit;
