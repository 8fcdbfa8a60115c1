//! List presets command implementation.

/// Runs the list-presets command.
pub fn run() {
    print!("{}", methodmatch_presets::listing());

    println!("\nUse --presets to select presets, entry names or codes, e.g.:");
    println!("  methodmatch check snapshot.toml --presets security,stream-peek");
    println!("  methodmatch check snapshot.toml --presets S2077,S3864");
}
