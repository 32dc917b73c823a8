pub mod web;

pub use web::run_web_server;
