use ramp_grid::{grid::Grid, GridParameters, Record};

/// Renders a fixture grid file to a PNG for eyeballing: each channel is
/// min/max-normalized to 0..=255, r on red and g on green.
///
///     preview [path] [width] [height]
fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "test.bin".to_string());
    let width: u32 = args
        .next()
        .map_or(512, |s| s.parse().expect("width must be an integer"));
    let height: u32 = args
        .next()
        .map_or(512, |s| s.parse().expect("height must be an integer"));

    let params = GridParameters::new(width, height).unwrap();
    let grid = Grid::<Record>::read_from_file(params, &path).unwrap();

    let (r_min, r_max) = channel_range(grid.iter().map(|cell| cell.r));
    let (g_min, g_max) = channel_range(grid.iter().map(|cell| cell.g));

    let mut image_buf = image::RgbImage::new(width, height);
    for ((x, y), cell) in grid.iter_with_pos() {
        let r = normalize(cell.r, r_min, r_max);
        let g = normalize(cell.g, g_min, g_max);
        image_buf.put_pixel(x, y, image::Rgb([r, g, 0]));
    }

    image_buf.save("preview.png").unwrap();
}

fn channel_range(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::MAX, f32::MIN), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

fn normalize(value: f32, min: f32, max: f32) -> u8 {
    if max <= min {
        return 0;
    }
    ((value - min) / (max - min) * 255.0) as u8
}
