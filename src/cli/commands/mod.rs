mod command_result;
pub mod divine;
pub mod init;

pub use command_result::*;
