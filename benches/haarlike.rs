use criterion::{criterion_group, criterion_main, Criterion};
use haarlike::{Bound, Channel, IntegralImage, RecenterConfig, WeightMatrix};
use std::hint::black_box;

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

fn bench_integral(c: &mut Criterion) {
    let (width, height) = (1280, 720);
    let red = make_plane(width, height, 1);
    let green = make_plane(width, height, 2);
    let blue = make_plane(width, height, 3);

    c.bench_function("integral_build_720p", |b| {
        b.iter(|| black_box(IntegralImage::build(width, height, &red, &green, &blue).unwrap()));
    });

    #[cfg(feature = "rayon")]
    c.bench_function("integral_build_par_720p", |b| {
        b.iter(|| {
            black_box(IntegralImage::build_par(width, height, &red, &green, &blue).unwrap())
        });
    });

    let img = IntegralImage::build(width, height, &red, &green, &blue).unwrap();
    let bound = Bound::from_coords(400, 200, 655, 455);

    let patterns = [
        ("horizontal", WeightMatrix::horizontal()),
        ("diagonal", WeightMatrix::diagonal()),
        ("inner5", WeightMatrix::inner5()),
    ];
    for (name, pattern) in &patterns {
        c.bench_function(&format!("apply_feature_{name}"), |b| {
            b.iter(|| black_box(img.apply_feature(Channel::Gray, black_box(&bound), pattern)));
        });
    }

    c.bench_function("recenter_gray", |b| {
        b.iter(|| {
            black_box(img.recenter_with(
                Channel::Gray,
                black_box(&bound),
                20,
                &RecenterConfig::default(),
            ))
        });
    });
}

criterion_group!(benches, bench_integral);
criterion_main!(benches);
