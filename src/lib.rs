//! Hello world example program for the Yocto 5.0 LTS lecture.
//!
//! Prints a greeting, a localized notice, the build date and time, and echoes
//! its command-line arguments.

pub mod build_info;
#[cfg(test)]
mod build_stamp;
pub mod greeting;
pub mod logging;

pub use greeting::write_banner;
