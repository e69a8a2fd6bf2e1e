use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Generate the 8-bit sRGB -> 16-bit linear LUT (256 entries).
    // Entry i is the linearized form of the 16-bit channel i * 257, rounded
    // half to even, so the LUT agrees exactly with linearize_u16.
    writeln!(file, "/// Lookup table for 8-bit sRGB to 16-bit linear conversion").unwrap();
    writeln!(file, "/// Index: 8-bit sRGB channel, Value: 16-bit linear channel").unwrap();
    writeln!(file, "pub static SRGB8_TO_LINEAR16: [u16; 256] = [").unwrap();
    for i in 0..256u32 {
        let srgb = (i * 257) as f64 / 65535.0;
        let linear = (srgb_to_linear_exact(srgb) * 65535.0).round_ties_even() as u16;
        if i > 0 && i % 8 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    // Rerun if build.rs changes
    println!("cargo::rerun-if-changed=build.rs");
}
