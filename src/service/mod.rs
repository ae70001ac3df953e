//! Record managers. Each is a unit struct whose methods take the store they act on.

pub mod airline;
pub mod airline_airport;
pub mod airport;

pub use airline::AirlineService;
pub use airline_airport::AirlineAirportService;
pub use airport::AirportService;
