//! Command implementations

pub mod init;
pub mod patterns;
pub mod scan;
pub mod validate;
