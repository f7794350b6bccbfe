use kernel_bench::benchmarks::suites::create_field;
use kernel_bench::kernels::gauss_seidel::{relax, relax_iterations};
use kernel_bench::{
    DynamicBuffer, KernelError, NumericBuffer, PackedBuffer, ScalarField, VectorizedBuffer,
};

/// Largest change between consecutive fields, measured over the interior.
fn interior_change<B: NumericBuffer>(before: &ScalarField<B>, after: &ScalarField<B>) -> f64 {
    let mut largest: f64 = 0.0;
    for i in 1..before.rows() - 1 {
        for j in 1..before.cols() - 1 {
            largest = largest.max((before.get(i, j) - after.get(i, j)).abs());
        }
    }
    largest
}

fn boundary_values<B: NumericBuffer>(field: &ScalarField<B>) -> Vec<f64> {
    let mut values = Vec::new();
    for i in 0..field.rows() {
        for j in 0..field.cols() {
            if field.is_boundary(i, j) {
                values.push(field.get(i, j));
            }
        }
    }
    values
}

#[test]
fn test_updates_shrink_and_boundary_holds() {
    let mut field = create_field::<PackedBuffer>(16, 0.0).unwrap();
    let boundary = boundary_values(&field);

    let mut previous_change = f64::INFINITY;
    for _ in 0..200 {
        let next = relax(&field).unwrap();
        let change = interior_change(&field, &next);
        assert!(
            change <= previous_change * (1.0 + 1e-12) + 1e-15,
            "update grew from {} to {}",
            previous_change,
            change
        );
        assert_eq!(boundary_values(&next), boundary);
        previous_change = change;
        field = next;
    }
    assert!(previous_change < 5e-2);
}

#[test]
fn test_uniform_field_is_fixed_point() {
    let field = ScalarField::<DynamicBuffer>::filled(9, 7, 1.25).unwrap();
    assert_eq!(relax_iterations(&field, 10).unwrap(), field);
}

#[test]
fn test_iterations_match_repeated_sweeps() {
    let field = create_field::<PackedBuffer>(10, 0.3).unwrap();
    let mut stepped = field.clone();
    for _ in 0..5 {
        stepped = relax(&stepped).unwrap();
    }
    assert_eq!(relax_iterations(&field, 5).unwrap(), stepped);
    assert_eq!(relax_iterations(&field, 0).unwrap(), field);
}

#[test]
fn test_cross_representation_equivalence() {
    let packed = relax_iterations(&create_field::<PackedBuffer>(12, 0.0).unwrap(), 25).unwrap();
    let dynamic = relax_iterations(&create_field::<DynamicBuffer>(12, 0.0).unwrap(), 25).unwrap();
    let vectorized =
        relax_iterations(&create_field::<VectorizedBuffer>(12, 0.0).unwrap(), 25).unwrap();

    let expected = packed.as_buffer().to_vec();
    assert_eq!(dynamic.as_buffer().to_vec(), expected);
    assert_eq!(vectorized.as_buffer().to_vec(), expected);
}

#[test]
fn test_grid_without_interior_is_rejected() {
    let thin = ScalarField::<PackedBuffer>::filled(2, 8, 0.0).unwrap();
    assert!(matches!(
        relax(&thin),
        Err(KernelError::DimensionMismatch { expected: 3, actual: 2, .. })
    ));

    let narrow = ScalarField::<PackedBuffer>::filled(8, 1, 0.0).unwrap();
    assert!(matches!(
        relax_iterations(&narrow, 3),
        Err(KernelError::DimensionMismatch { expected: 3, actual: 1, .. })
    ));
}
