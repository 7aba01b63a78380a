pub mod review;
pub mod tire_pressure;
pub mod vehicle;

pub use review::ReviewService;
pub use tire_pressure::TirePressureService;
pub use vehicle::VehicleService;
