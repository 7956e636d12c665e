//! Human-readable console reporting
//!
//! Progress lines and the closing summary. Console text is for people; no
//! other component consumes it.

use crate::pipeline::GeneratedIcon;

/// On-disk size in KB (1024-byte units).
pub fn kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// One progress line per written file: name, dimensions, size.
pub fn file_line(icon: &GeneratedIcon) -> String {
    format!(
        "Generated {} ({}x{}) - {:.1} KB",
        icon.name,
        icon.width,
        icon.height,
        kb(icon.bytes)
    )
}

/// Closing banner listing every file that was written.
pub fn print_summary(icons: &[GeneratedIcon]) {
    println!();
    println!("All icons generated successfully!");
    println!();
    println!("Generated files:");
    for icon in icons {
        println!("   {:<35} ({:.1} KB)", icon.name, kb(icon.bytes));
    }
}
