//! The banner printed by the program.

use crate::build_info::{BUILD_DATE, BUILD_TIME};
use std::ffi::OsStr;
use std::io::{self, Write};

/// First line of output.
pub const GREETING: &str = "Hello, Yocto World!";

/// Second line of output: "This is an example program for the Yocto 5.0 LTS lecture."
pub const LOCALIZED_NOTICE: &str = "이것은 Yocto 5.0 LTS 강의용 예제 프로그램입니다.";

/// Label in front of the build date and time ("build date").
pub const BUILD_DATE_LABEL: &str = "빌드 날짜";

/// Label in front of the echoed arguments ("received arguments").
pub const ARGS_LABEL: &str = "전달받은 인수";

/// Number of lines [`write_banner`] emits for `arg_count` echoed arguments.
///
/// ```
/// let mut out = Vec::new();
/// helloworld::write_banner(&mut out, &["foo", "bar"]).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), helloworld::greeting::line_count(2));
/// ```
pub fn line_count(arg_count: usize) -> usize {
    if arg_count == 0 {
        3
    } else {
        4
    }
}

/// Writes the banner to `out`.
///
/// `args` must not contain the program's invocation name. Each argument is
/// written verbatim followed by a single space, so the arguments line always
/// ends in `" \n"`.
///
/// # Errors
///
/// Returns any error reported by `out`.
pub fn write_banner<W, S>(out: &mut W, args: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<OsStr>,
{
    writeln!(out, "{GREETING}")?;
    writeln!(out, "{LOCALIZED_NOTICE}")?;
    writeln!(out, "{BUILD_DATE_LABEL}: {BUILD_DATE} {BUILD_TIME}")?;

    if !args.is_empty() {
        write!(out, "{ARGS_LABEL}: ")?;
        for arg in args {
            write_os_str(out, arg.as_ref())?;
            out.write_all(b" ")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(unix)]
fn write_os_str<W: Write>(out: &mut W, s: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(s.as_bytes())
}

#[cfg(not(unix))]
fn write_os_str<W: Write>(out: &mut W, s: &OsStr) -> io::Result<()> {
    out.write_all(s.to_string_lossy().as_bytes())
}
