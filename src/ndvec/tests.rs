use proptest::prelude::*;

use super::*;
use crate::axis::Axis::{X, Y, Z};

#[test]
fn test_ndvec_constructors() {
    let v1: IVec3D = NdVec([2, 10, -3]);
    assert_eq!(2, v1[X]);
    assert_eq!(10, v1[Y]);
    assert_eq!(-3, v1[Z]);

    let v2: IVec3D = NdVec::repeat(6);
    assert_eq!(NdVec([6; 3]), v2);

    let v3: UVec2D = NdVec::unit(Y);
    assert_eq!(NdVec([0, 1]), v3);

    assert!(IVec3D::origin().is_zero());
    assert!(!v1.is_zero());
}

#[test]
fn test_ndvec_sum_product() {
    let v: UVec3D = NdVec([4, 5, 6]);
    assert_eq!(15, v.sum());
    assert_eq!(120, v.product());
}

#[test]
fn test_ndvec_min_max() {
    let v1: IVec2D = NdVec([3, -2]);
    let v2: IVec2D = NdVec([1, 5]);
    assert_eq!(NdVec([1, -2]), NdVec::min(&v1, &v2));
    assert_eq!(NdVec([3, 5]), NdVec::max(&v1, &v2));
}

#[test]
fn test_ndvec_convert() {
    let v: UVec2D = NdVec([7, 0]);
    assert_eq!(v, v.to_ivec().to_uvec());
}

#[test]
fn test_ndvec_display() {
    let v: IVec3D = NdVec([1, -2, 3]);
    assert_eq!("[1, -2, 3]", format!("{}", v));
}

impl proptest::arbitrary::Arbitrary for IVec2D {
    type Parameters = Option<isize>;
    type Strategy = BoxedStrategy<Self>;
    fn arbitrary_with(max: Option<isize>) -> Self::Strategy {
        let max = max.unwrap_or(100);
        prop::collection::vec(-max..=max, 2)
            .prop_flat_map(|v| Just(NdVec([v[0], v[1]])))
            .boxed()
    }
}

proptest! {
    #[test]
    fn test_ndvec_add_sub(v1: IVec2D, v2: IVec2D) {
        prop_assert_eq!(v1, (v1 + v2) - v2);
        prop_assert_eq!(IVec2D::origin(), v1 - v1);
    }

    #[test]
    fn test_ndvec_neg(v: IVec2D) {
        prop_assert_eq!(IVec2D::origin(), v + -v);
    }

    #[test]
    fn test_ndvec_scalar_ops(v: IVec2D, n in -50..=50isize) {
        prop_assert_eq!(v + n, v + IVec2D::repeat(n));
        prop_assert_eq!((v * n)[X], v[X] * n);
    }
}
