//! Plotting a preset table read from JSON.
//!
//! ```text
//! cargo run --example custom_presets -- presets.json out.svg
//! ```

use hermite_easing::{render_with, PresetTable, Style, SvgBackend};
use std::{env, fs::File, io::BufReader, io::BufWriter};

fn main() -> hermite_easing::Result<()> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "presets.json".into());
    let output = args.next().unwrap_or_else(|| "custom_presets.svg".into());

    let presets = PresetTable::from_reader(BufReader::new(File::open(&input)?))?;
    println!("Loaded {} presets from {input}", presets.len());

    let style = Style {
        title: format!("Easing Curves from {input}"),
        ..Style::default()
    };
    let mut backend = SvgBackend::new(BufWriter::new(File::create(&output)?));
    render_with(&presets, &style, &mut backend)?;

    println!("Wrote {output}");
    Ok(())
}
