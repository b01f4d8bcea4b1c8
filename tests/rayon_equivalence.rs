#![cfg(feature = "rayon")]

use haarlike::{Bound, Channel, IntegralImage, WeightMatrix};

fn make_plane(width: usize, height: usize, seed: usize) -> Vec<u16> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13 + seed) ^ (y * 7) ^ (x * y)) & 0xFFFF;
            data.push(value as u16);
        }
    }
    data
}

#[test]
fn parallel_build_matches_sequential() {
    let (width, height) = (211, 157);
    let red = make_plane(width, height, 1);
    let green = make_plane(width, height, 2);
    let blue = make_plane(width, height, 3);

    let seq = IntegralImage::build(width, height, &red, &green, &blue).unwrap();
    let par = IntegralImage::build_par(width, height, &red, &green, &blue).unwrap();

    for channel in Channel::ALL {
        assert_eq!(seq.table(channel), par.table(channel), "{channel}");
    }

    let bound = Bound::from_coords(17, 9, 180, 140);
    let pattern = WeightMatrix::inner4();
    for channel in Channel::ALL {
        assert_eq!(
            seq.apply_feature(channel, &bound, &pattern),
            par.apply_feature(channel, &bound, &pattern)
        );
    }
}

#[test]
fn parallel_build_reports_bad_planes() {
    let plane = vec![0u16; 12];
    let short = vec![0u16; 11];
    assert!(IntegralImage::build_par(4, 3, &plane, &short, &plane).is_err());
}
