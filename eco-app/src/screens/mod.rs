//! Interactive screens.
//!
//! One screen renders at a time; the session state decides which
//! (login view, the mobile tabs, or the admin panel). Screens write to
//! stdout and read line-oriented commands from stdin; logging goes to
//! stderr so it never interleaves with the screen content.

pub mod admin;
pub mod bin_map;
pub mod home;
pub mod login;
pub mod profile;
pub mod rewards;
pub mod scanner;

use std::io::{self, Write};

/// Print a prompt and read one trimmed line. `None` means stdin closed.
pub(crate) fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label} ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub(crate) fn header(title: &str) {
    println!("\n=== {title} ===\n");
}
