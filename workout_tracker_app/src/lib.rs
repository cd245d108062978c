pub mod app;
pub mod config;
pub mod event;
pub mod form;
pub mod handlers;
pub mod location;
pub mod render;
pub mod state;
pub mod view;
