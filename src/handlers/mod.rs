pub mod index;
pub mod log;

pub use index::index_handler;
pub use log::log_handler;
