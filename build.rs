use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

fn write_str_const(out: &mut File, key: &str, value: &str) -> io::Result<()> {
    writeln!(
        out,
        "#[allow(unused)]\npub const APP_METADATA_{}: &str = \"{}\";",
        key.to_uppercase(),
        value
    )
}

fn write_bytes_const(out: &mut File, key: &str, value: &[u8]) -> io::Result<()> {
    let bytes: Vec<String> = value.iter().map(|b| b.to_string()).collect();
    writeln!(
        out,
        "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
        key.to_uppercase(),
        value.len(),
        bytes.join(", ")
    )
}

/// Truncates or pads a string to an exact byte length.
fn exact_len(mut value: String, len: usize) -> Vec<u8> {
    value.truncate(len);
    while value.len() < len {
        value.push('!');
    }
    value.into_bytes()
}

fn main() -> io::Result<()> {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "wraptime");
        res.compile().unwrap();
    }

    // Load .env file if it exists
    let _ = dotenv();

    let out_dir = env::var("OUT_DIR").unwrap();
    let mut out = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;

    write_str_const(&mut out, "NAME", &env::var("CARGO_PKG_NAME").unwrap())?;
    write_str_const(&mut out, "VERSION", &env::var("CARGO_PKG_VERSION").unwrap())?;

    // Forward [package.metadata] entries from the manifest
    let manifest = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let manifest: Value = toml::from_str(&manifest).expect("Failed to parse Cargo.toml");
    if let Some(metadata) = manifest.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                write_str_const(&mut out, key, value)?;
            }
        }
    }

    // Embed the password-cache encryption key and IV. Real keys come from the
    // environment (or a .env file); package-name-derived defaults keep local
    // builds working.
    let (key, iv) = match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            assert_eq!(key.len(), KEY_LEN, "ENCRYPTION_KEY must be exactly {} bytes", KEY_LEN);
            assert_eq!(iv.len(), IV_LEN, "ENCRYPTION_IV must be exactly {} bytes", IV_LEN);
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "wraptime".to_string());

            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not found in environment.");
            println!("cargo:warning=Using default keys. For production, create a .env file with:");
            println!("cargo:warning=ENCRYPTION_KEY=your_32_byte_key_here!!!!!!!!!");
            println!("cargo:warning=ENCRYPTION_IV=your_16_byte_iv!");

            (
                exact_len(format!("{}_default_encryption_key", package_name), KEY_LEN),
                exact_len(format!("{}_iv", package_name), IV_LEN),
            )
        }
    };

    write_bytes_const(&mut out, "ENCRYPTION_KEY", &key)?;
    write_bytes_const(&mut out, "ENCRYPTION_IV", &iv)?;

    Ok(())
}
