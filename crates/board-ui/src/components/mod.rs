pub mod header;
pub mod messages;

pub use header::Header;
pub use messages::message_lines;
