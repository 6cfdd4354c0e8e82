pub mod admin;
pub mod app;
pub mod home;
pub mod login;
pub mod products;
pub mod shared;
pub mod signup;

pub use app::{render_app, render_loading};
