pub mod index;
pub mod init;
pub mod play;
pub mod reset;
pub mod review;
