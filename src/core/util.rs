//! Common utilities

use std::io::{BufRead, IsTerminal};
use xxhash_rust::xxh3::xxh3_64;

/// Hash of file content, as 16 hex digits
pub fn content_hash(content: &str) -> String {
    format!("{:016x}", xxh3_64(content.as_bytes()))
}

/// Block until the user presses Enter.
///
/// Does nothing when stdin is not a terminal, so piped runs never hang.
pub fn wait_for_enter(prompt: &str) {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return;
    }

    eprint!("{}", prompt);
    let mut line = String::new();
    // A read failure just ends the pause.
    let _ = stdin.lock().read_line(&mut line);
}
