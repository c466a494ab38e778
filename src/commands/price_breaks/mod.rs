pub mod create_price_break_command;
pub mod delete_price_break_command;
pub mod update_price_break_command;

pub use create_price_break_command::CreatePriceBreakCommand;
pub use delete_price_break_command::DeletePriceBreakCommand;
pub use update_price_break_command::UpdatePriceBreakCommand;
