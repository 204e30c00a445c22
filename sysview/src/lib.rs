//! sysview - real-time terminal system overview
//!
//! Combines an htop style process list, nvidia-smi GPU status and network
//! monitoring into one dashboard.

pub mod app;
pub mod terminal;
pub mod ui;

pub use app::App;
