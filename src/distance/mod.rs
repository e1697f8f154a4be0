//! Travel-time lookup over a directed connection network.

mod travel_times;

pub use travel_times::TravelTimes;
