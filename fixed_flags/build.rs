use std::env;
use std::fs;
use std::path::Path;

const MAX_FLAGS: usize = 1024;
const MAX_FLAGS_WIDE: usize = 4096;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("select_table.rs");

    let max = if env::var_os("CARGO_FEATURE_WIDE").is_some() {
        MAX_FLAGS_WIDE
    } else {
        MAX_FLAGS
    };

    let mut table = String::new();
    table.push_str(&format!("pub const MAX_FLAGS: usize = {max};\n\n"));
    for n in 1..=max {
        table.push_str(&format!("select_layout!({n});\n"));
    }

    fs::write(&dest_path, table).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
