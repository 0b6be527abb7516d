//! Dump the MD2 normal table as JSON for cross-implementation testing.
//!
//! Run: `cargo run -p md2-decode --features test-tools --bin dump_normals -- [output.json]`
//!
//! Without an argument the JSON is written to stdout.

use std::env;
use std::fs::File;
use std::io::{self, Write};

use md2_decode::{NORMAL_COUNT, iter_normals};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let normals: Vec<[f32; 3]> = iter_normals().map(<[f32; 3]>::from).collect();
    let json = serde_json::json!({
        "count": NORMAL_COUNT,
        "normals": normals,
    });
    let text = serde_json::to_string_pretty(&json)?;

    if let Some(path) = env::args().nth(1) {
        File::create(&path)?.write_all(text.as_bytes())?;
        println!("Saved {NORMAL_COUNT} normals to {path}");
    } else {
        writeln!(io::stdout().lock(), "{text}")?;
    }

    Ok(())
}
