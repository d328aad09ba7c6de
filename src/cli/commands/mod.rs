pub mod add;
pub mod config;
pub mod help;
pub mod init;
pub mod list;
pub mod locate;
pub mod mark;
pub mod report;
pub mod start;
pub mod status;
