use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gpucaps::{detect_gpu_vendor, get_gpu_info_from_description, GpuInfo};

pub fn bench_vendor_detection(c: &mut Criterion) {
    c.bench_function("detect_gpu_vendor", |b| {
        b.iter(|| detect_gpu_vendor(black_box("Adreno (TM) 640")))
    });
}

pub fn bench_full_classification(c: &mut Criterion) {
    c.bench_function("get_gpu_info_from_description", |b| {
        b.iter(|| {
            let mut gpu_info = GpuInfo::default();
            get_gpu_info_from_description(
                black_box("OpenGL ES 3.2 V@415.0 Adreno (TM) 640"),
                &mut gpu_info,
            );
            gpu_info
        })
    });
}

criterion_group!(benches, bench_vendor_detection, bench_full_classification);
criterion_main!(benches);
