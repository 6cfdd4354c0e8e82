pub mod overview;
pub mod sales;
pub mod upload;
pub mod users;
