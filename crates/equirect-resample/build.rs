use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

// Keep in sync with src/color/transfer.rs
const K0: f64 = 0.03928;
const A: f64 = 0.055;
const PHI: f64 = 12.92;
const GAMMA: f64 = 2.4;

/// sRGB to linear with the panorama transfer constants
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= K0 {
        srgb / PHI
    } else {
        ((srgb + A) / (1.0 + A)).powf(GAMMA)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("decode_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit code value
    writeln!(file, "/// Lookup table for 8-bit sRGB to linear conversion").unwrap();
    writeln!(file, "/// Index: byte value, Value: linear(byte / 255)").unwrap();
    writeln!(file, "pub static DECODE_U8: [f32; 256] = [").unwrap();
    for i in 0..256 {
        let srgb = i as f64 / 255.0;
        let linear = srgb_to_linear_exact(srgb);
        if i > 0 && i % 8 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:.9},", linear as f32).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
