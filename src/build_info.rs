//! Build date and time captured by the build script.

/// Date the binary was compiled, formatted like C's `__DATE__` (`Oct  5 2026`).
pub const BUILD_DATE: &str = env!("HELLOWORLD_BUILD_DATE");

/// Time the binary was compiled, formatted like C's `__TIME__` (`14:03:59`).
pub const BUILD_TIME: &str = env!("HELLOWORLD_BUILD_TIME");
