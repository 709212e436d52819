//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use signinghub::ApiResponse;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print whatever an API call returned.
pub fn response(response: &ApiResponse) -> Result<()> {
    match response {
        ApiResponse::Json(value) => json_pretty(value)?,
        ApiResponse::Bytes(bytes) => field("Binary body", &format!("{} bytes", bytes.len())),
        ApiResponse::Raw(raw) => {
            field("Status", raw.status().as_str());
            let text = raw.text();
            if !text.is_empty() {
                println!("{}", text);
            }
        }
    }
    Ok(())
}
