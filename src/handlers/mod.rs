pub mod broadcast;
pub mod command;
pub mod owner;
pub mod text;
pub mod ui;

pub type HandlerResult = Result<(), anyhow::Error>;

pub use broadcast::{Refusal, broadcast_handler, validate_broadcast};
pub use command::command_handler;
pub use owner::message_owner_handler;
pub use text::text_handler;
