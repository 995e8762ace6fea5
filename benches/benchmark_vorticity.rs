use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use vorticity2d::*;
use vorticity2d::navier::Vorticity2D;

const SIZES: [usize; 3] = [128, 256, 512];

pub fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transform");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let grid = Grid::periodic(*n, *n).unwrap();
        let mut field = Field2::new(&grid).unwrap();
        for (i, v) in field.v.iter_mut().enumerate() {
            *v = i as f64;
        }
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| field.forward().unwrap()));
    }
    group.finish();
}

pub fn bench_vorticity(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vorticity2D");
    group.significance_level(0.1).sample_size(10);
    let nu = 1e-3;
    let dt = 0.01;
    for n in SIZES.iter() {
        let grid = Grid::periodic(*n, *n).unwrap();
        let ctx = SimulationContext::new(grid, nu, dt, false).unwrap();
        let vort = Scenario::Random.generate(&grid, 0).unwrap();
        let mut navier = Vorticity2D::new(ctx, &vort).unwrap();
        navier.prepare().unwrap();
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| navier.update().unwrap()));
    }
    group.finish();
}

criterion_group!(benches, bench_transform, bench_vorticity);
criterion_main!(benches);
