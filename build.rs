//! Resolves the build date and time once per compilation.
//!
//! The values are rendered in the C `__DATE__`/`__TIME__` formats and handed
//! to the crate as `HELLOWORLD_BUILD_DATE` and `HELLOWORLD_BUILD_TIME`.

#[path = "src/build_stamp.rs"]
mod build_stamp;

use chrono::{Local, NaiveDateTime};
use std::env;
use std::io;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let (date, time) = build_stamp::render(&build_timestamp()?);

    println!("cargo:rustc-env=HELLOWORLD_BUILD_DATE={date}");
    println!("cargo:rustc-env=HELLOWORLD_BUILD_TIME={time}");

    Ok(())
}

/// `SOURCE_DATE_EPOCH` is interpreted as UTC, the host clock as local time.
fn build_timestamp() -> io::Result<NaiveDateTime> {
    match env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => build_stamp::from_epoch(&epoch),
        Err(env::VarError::NotPresent) => Ok(Local::now().naive_local()),
        Err(env::VarError::NotUnicode(raw)) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("SOURCE_DATE_EPOCH is not valid unicode: {raw:?}"),
        )),
    }
}
