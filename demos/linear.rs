use ramp_grid::{grid::Grid, FillPolicy, GridParameters, Record};

fn main() {
    let params = GridParameters::new(512, 512).unwrap();
    Grid::<Record>::generate_to_file(params, FillPolicy::Linear, "test.bin").unwrap();
}
