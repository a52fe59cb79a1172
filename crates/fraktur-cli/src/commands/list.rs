use anyhow::Result;
use console::style;

use fraktur_core::fractal::FractalKind;
use fraktur_core::session::RESOLUTION_OPTIONS;

pub fn run() -> Result<()> {
    println!("{}", style("Fractals").bold());
    for (i, kind) in FractalKind::ALL.iter().enumerate() {
        println!("  {}  [key {}]  {}", i, kind.hotkey(), kind.name());
    }

    println!("\n{}", style("Resolutions").bold());
    for (i, option) in RESOLUTION_OPTIONS.iter().enumerate() {
        println!("  {}  {}", i, option.name);
    }

    Ok(())
}
