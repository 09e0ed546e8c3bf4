use std::{env, path::PathBuf, process};

use ramp_grid::{grid::Grid, FillPolicy, GridParameters, Record};

/// Writes a fixture grid file. All arguments are optional and default to the
/// 512x512 linear fixture:
///
///     make_grid [width] [height] [linear|quadratic] [path]
fn main() {
    let mut args = env::args().skip(1);
    let width: u32 = args
        .next()
        .map_or(512, |s| s.parse().expect("width must be an integer"));
    let height: u32 = args
        .next()
        .map_or(512, |s| s.parse().expect("height must be an integer"));
    let policy: FillPolicy = args.next().map_or(FillPolicy::Linear, |s| {
        s.parse().expect("policy must be \"linear\" or \"quadratic\"")
    });
    let path = args
        .next()
        .map_or_else(|| PathBuf::from("test.bin"), PathBuf::from);

    let params = match GridParameters::new(width, height) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("make_grid: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = Grid::<Record>::generate_to_file(params, policy, &path) {
        eprintln!("make_grid: failed to write {}: {}", path.display(), err);
        process::exit(1);
    }

    println!(
        "wrote {} ({}x{}, {:?}, {} bytes)",
        path.display(),
        width,
        height,
        policy,
        params.cell_count() * 8
    );
}
