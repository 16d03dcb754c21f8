//! Fixed text printed by the `help`, `version`, `license`, and `man-page` directives.

use std::io::Write;

use crate::Result;
use crate::colors::NAMED_COLORS;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const LICENSE: &str = env!("CARGO_PKG_LICENSE");

const USAGE: &str = "\
usage: blinkt [<selection>] <command>

commands:
  on | off              turn all LEDs on or off (on also ends a hold)
  left | right          number pixels from the left or from the right
  hold | show           stop updating the strip / show held changes
  clear                 reset everything except left/right numbering
  bright N              set brightness, 0 to 31
  rgb R G B             set color, each 0 to 255
  <color>               set a named color
  binary N | off        show N as an on/off pattern, or stop
  rotate in|out|left|right
                        move pixels (or the binary pattern) one step
  delay MS              wait MS milliseconds
  state                 print the saved state
  version | license | man-page | help

selection picks the pixels a command changes (default: all). It is binary
unless prefixed: b1010 (binary), d10 (decimal), xA (hex), p3 (pixel 3).
Numbers may use the same prefixes.
";

/// Print usage, including the list of named colors.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if `out` cannot be written.
pub fn write_usage(out: &mut impl Write) -> Result<()> {
    out.write_all(USAGE.as_bytes())?;
    let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
    writeln!(out, "\ncolors: {}", names.join(", "))?;
    Ok(())
}

/// Print the program name and version.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if `out` cannot be written.
pub fn write_version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{NAME} {VERSION}")?;
    Ok(())
}

/// Print the license notice.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if `out` cannot be written.
pub fn write_license(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{NAME} {VERSION} is licensed under {LICENSE}.")?;
    writeln!(
        out,
        "It is provided \"as is\", without warranty of any kind, express or implied."
    )?;
    Ok(())
}

/// Print a roff source for `man 1 blinkt`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if `out` cannot be written.
pub fn write_man_page(out: &mut impl Write) -> Result<()> {
    writeln!(out, ".TH BLINKT 1 \"\" \"{NAME} {VERSION}\" \"User Commands\"")?;
    writeln!(out, ".SH NAME")?;
    writeln!(out, "{NAME} \\- control an 8-pixel APA102 LED strip")?;
    writeln!(out, ".SH SYNOPSIS")?;
    writeln!(out, ".B blinkt")?;
    writeln!(out, "[\\fIselection\\fR] \\fIcommand\\fR [\\fIargs\\fR]")?;
    writeln!(out, ".SH DESCRIPTION")?;
    writeln!(out, ".nf")?;
    out.write_all(USAGE.replace('\\', "\\\\").as_bytes())?;
    writeln!(out, ".fi")?;
    writeln!(out, ".SH FILES")?;
    writeln!(out, ".TP")?;
    writeln!(out, ".I {}", crate::config::DEFAULT_STATE_PATH)?;
    writeln!(
        out,
        "saved state; override with \\fB{}\\fR",
        crate::config::STATE_FILE_ENV
    )?;
    Ok(())
}
