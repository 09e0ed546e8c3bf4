use ramp_grid::{grid::Grid, FillPolicy, GridParameters, Record};

fn main() {
    let params = GridParameters::new(64, 64).unwrap();
    Grid::<Record>::generate_to_file(params, FillPolicy::Quadratic, "test.bin").unwrap();
}
