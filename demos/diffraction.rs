//! Single-slit diffraction intensity as an ASCII sparkline.
//!
//! Samples the sinc² envelope the diffraction scene plots and prints one
//! column per sample, central maximum in the middle.
//!
//! Run with: cargo run --example diffraction

use beatviz::physics::diffraction_intensity;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    const COLS: usize = 91;
    const X_MAX: f32 = 15.0;
    let bars = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    let mut line = String::with_capacity(COLS);
    for col in 0..COLS {
        let x = -X_MAX + 2.0 * X_MAX * col as f32 / (COLS - 1) as f32;
        let intensity = diffraction_intensity(x);
        let level = ((intensity * (bars.len() - 1) as f32).round() as usize).min(bars.len() - 1);
        line.push(bars[level]);
    }
    println!("{}", line);
    println!("{:>width$}", "^ central maximum", width = COLS / 2 + 9);

    Ok(())
}
