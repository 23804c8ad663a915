use hermite_easing::{render_default, Result, SvgBackend};
use std::{env, fs::File, io::BufWriter, path::PathBuf};

const DEFAULT_OUTPUT: &str = "hermite_presets.svg";

fn main() -> Result<()> {
    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let mut backend = SvgBackend::new(BufWriter::new(File::create(&path)?));
    render_default(&mut backend)?;

    println!("Wrote {}", path.display());
    Ok(())
}
