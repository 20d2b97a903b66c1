//! `helloworld` binary.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

fn main() {
    helloworld::logging::init();

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    log::debug!(
        "echoing {} argument(s) in {} line(s)",
        args.len(),
        helloworld::greeting::line_count(args.len())
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = helloworld::write_banner(&mut out, &args).and_then(|()| out.flush()) {
        log::error!("failed to write to stdout: {err}");
    }
}
