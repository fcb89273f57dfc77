//! Variadic wrappers delegate with no extra semantics.

use super::common::Count;
use num_traits::Zero;
use seqops::{max, min, sum, var_all, var_any, var_max, var_min, var_sum};

#[test]
fn no_args() {
    assert!(!var_any!());
    assert!(var_all!());
    assert_eq!(var_sum!(type f64), 0.0);
    assert_eq!(var_min!(type u32), 0u32);
    assert_eq!(var_max!(type i64), 0i64);
}

#[test]
fn no_args_by_inference() {
    let total: f64 = var_sum!();
    let lowest: u32 = var_min!();
    let highest: i64 = var_max!();
    assert_eq!(total, sum::<f64>(&[]));
    assert_eq!(lowest, min::<u32>(&[]));
    assert_eq!(highest, max::<i64>(&[]));
}

#[test]
fn one_arg_all_any() {
    for b in [false, true] {
        assert_eq!(var_all!(b), b);
        assert_eq!(var_any!(b), b);
    }
}

#[test]
fn one_arg_sum_min_max() {
    let x = 0.318_309_886;
    assert_eq!(var_sum!(x), x);
    assert_eq!(var_min!(x), x);
    assert_eq!(var_max!(x), x);

    let y = 2_147_483_647_i64;
    assert_eq!(var_sum!(y), y);
    assert_eq!(var_min!(y), y);
    assert_eq!(var_max!(y), y);
}

#[test]
fn newtype_arguments() {
    assert_eq!(var_min!(Count(4), Count(-2)), Count(-2));
    assert_eq!(var_max!(Count(4), Count(-2)), Count(4));
    assert_eq!(var_sum!(Count::zero()), Count(0));
}


#[test]
fn explicit_generic_type() {
    use std::num::Wrapping;

    assert_eq!(var_sum!(type Wrapping<i32>), Wrapping(0));
    assert_eq!(var_min!(type Wrapping<u8>), Wrapping(0));
    assert_eq!(var_max!(type Count), Count(0));
    assert_eq!(var_sum!(Wrapping(i32::MAX), Wrapping(1)), Wrapping(i32::MIN));
}
