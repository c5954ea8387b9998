pub mod init;
pub mod show;
pub mod validate;
