pub mod delete_part_command;
pub mod register_part_command;

pub use delete_part_command::DeletePartCommand;
pub use register_part_command::RegisterPartCommand;
