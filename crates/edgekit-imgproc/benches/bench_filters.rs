use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use edgekit_image::{ColorProfile, PixelMatrix};
use edgekit_imgproc::{color, filter};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Edge Detection");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_data = (0..width * height * 4).map(|i| (i % 251) as u8).collect();
        let image = PixelMatrix::new(*width, *height, ColorProfile::Rgba, Some(image_data)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("gray_from_rgba", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(color::gray_from_rgba(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("detect_vertical_edges", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(filter::detect_vertical_edges(i)).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("detect_horizontal_edges", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(filter::detect_horizontal_edges(i)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
