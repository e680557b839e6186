mod farmer_repository;

pub use farmer_repository::PostgresFarmerRepository;
