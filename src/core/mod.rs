pub mod ballistics;
pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod scene;
