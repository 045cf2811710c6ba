//! Terminal UI utilities.
//!
//! Status lines go to stderr so tokens printed on stdout stay
//! pipe-clean; the decode report is the product and stays on stdout.

use colored::Colorize;

/// Print a success status to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an error status to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info status to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a key-value pair.
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print the verification verdict.
pub fn verdict(valid: bool) {
    if valid {
        println!("{}", "VALID".green().bold());
    } else {
        println!("{}", "INVALID".red().bold());
    }
}

/// Display a QR code in the terminal.
pub fn qr_code(data: &str) -> anyhow::Result<()> {
    use qrcode::QrCode;

    let code = QrCode::new(data)?;
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();

    println!("\n{}\n", string);
    Ok(())
}
