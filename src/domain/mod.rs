pub mod diagnosis;
pub mod markdown;
pub mod payload;
pub mod ticket;
