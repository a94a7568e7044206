pub mod init;
pub mod joke;
pub mod quiz;
pub mod roster;
