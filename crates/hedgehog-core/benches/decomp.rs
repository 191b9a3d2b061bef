use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hedgehog_core::linalg::{CholeskyDecomposition, LuDecomposition, QrDecomposition};
use hedgehog_core::Matrix;

/// Diagonally dominant SPD matrix: `A[i,i] = n`, small symmetric noise elsewhere.
fn spd(n: usize) -> Matrix {
    let mut a = Matrix::zeros(n, n);
    for i in 0..n {
        a[(i, i)] = n as f64;
        for j in 0..i {
            let noise = 0.05 * ((i + j) as f64 / n as f64);
            a[(i, j)] = noise;
            a[(j, i)] = noise;
        }
    }
    a
}

pub fn decomp(c: &mut Criterion) {
    for n in [16, 64, 128] {
        let a = spd(n);

        c.bench_function(&format!("cholesky-{n}"), |b| {
            b.iter(|| CholeskyDecomposition::decompose(black_box(&a)).unwrap())
        });

        c.bench_function(&format!("lu-{n}"), |b| {
            b.iter(|| LuDecomposition::decompose(black_box(&a)).unwrap())
        });

        c.bench_function(&format!("qr-{n}"), |b| {
            b.iter(|| QrDecomposition::decompose(black_box(&a)).unwrap())
        });

        c.bench_function(&format!("qr-q-{n}"), |b| {
            let qr = QrDecomposition::decompose(&a).unwrap();
            b.iter(|| black_box(&qr).q())
        });
    }
}

criterion_group!(benches, decomp);
criterion_main!(benches);
