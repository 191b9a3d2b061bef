use approx::assert_relative_eq;
use hedgehog::prelude::*;

#[test]
fn prelude_exposes_all_decompositions() {
    let a = Matrix::from_rows(&[
        &[4.0, 12.0, -16.0],
        &[12.0, 37.0, -43.0],
        &[-16.0, -43.0, 98.0],
    ])
    .unwrap();

    let l = cholesky(&a).unwrap().into_l();
    let expected =
        Matrix::from_rows(&[&[2.0, 0.0, 0.0], &[6.0, 1.0, 0.0], &[-8.0, 5.0, 3.0]]).unwrap();
    assert_relative_eq!(l, expected, epsilon = 1e-12);

    let lu = lu(&a).unwrap();
    let pa = lu.p().matmul(&a).unwrap();
    assert_relative_eq!(pa, lu.l().matmul(&lu.u()).unwrap(), epsilon = 1e-10);

    let qr = qr(&a).unwrap();
    assert_relative_eq!(qr.q().matmul(&qr.r()).unwrap(), a, epsilon = 1e-10);
}

#[test]
fn errors_are_matchable() {
    let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    match cholesky(&a) {
        Err(DecompError::NotHermitian) => {}
        other => panic!("expected NotHermitian, got {other:?}"),
    }
}
