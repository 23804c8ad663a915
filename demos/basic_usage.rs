//! Basic usage example for hermite-easing

use hermite_easing::{
    default_presets, evaluate_hermite, HermiteParams, SampleGrid,
};

fn main() {
    println!("=== Hermite Easing Presets ===\n");

    // Example 1: Sample every built-in preset at a few points
    let t = [0.0, 0.25, 0.5, 0.75, 1.0];
    print!("{:<18}", "preset");
    for x in t {
        print!("{x:>8.2}");
    }
    println!();
    for (name, params) in &default_presets() {
        let ys = evaluate_hermite(&t, params);
        print!("{name:<18}");
        for y in ys {
            print!("{y:>8.4}");
        }
        println!();
    }

    // Example 2: A curve of your own
    println!("\nCustom curve:");
    let snap = HermiteParams::new(0.0, 5.0, 1.0, 0.0);
    for x in [0.0, 0.1, 0.2, 0.5, 1.0] {
        println!(
            "  ease({:.2}) = {:.4}, velocity = {:.4}",
            x,
            snap.eval(x),
            snap.velocity(x)
        );
    }

    // Example 3: Peak of a bump
    let grid = SampleGrid::unit();
    let bump = default_presets().get("bump").copied().unwrap();
    let ys = evaluate_hermite(&grid, &bump);
    let peak = ys.iter().copied().fold(f64::MIN, f64::max);
    println!("\nbump peaks at {peak:.4}");

    // Example 4: Invalid grids are rejected
    println!("\nError handling:");
    match SampleGrid::linspace(1.0, 0.0, 10) {
        Ok(grid) => println!("  Grid: {:?}", grid.as_slice()),
        Err(e) => println!("  Error: {}", e),
    }
}
