pub mod controller;
pub mod models;
pub mod views;
