pub mod model;
pub mod repository;
pub mod seed;

pub use model::{Auction, AuctionFilter, AuctionStatus, NewAuction};
pub use repository::AuctionRepository;
pub use seed::seed_data;
