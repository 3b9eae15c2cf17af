#![cfg(test)]

use super::*;

#[test]
fn test_filter_parity() {
    let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    assert_eq!(filter_parity(&numbers, Parity::Odd), [1, 3, 5, 7, 9]);
    assert_eq!(filter_parity(&numbers, Parity::Even), [2, 4, 6, 8, 10]);
    assert_eq!(
        filter_parity(&[-3, -2, 0], Parity::Odd),
        [-3],
        "Negative odd numbers should be kept."
    );
    assert!(filter_parity(&[], Parity::Even).is_empty());
    assert!(Parity::of(0).is_even() && Parity::of(-1).is_odd());
}

#[test]
fn test_average() {
    assert_eq!(average(&[0.5, 3.0, 2.5]), 2.0);
    assert_eq!(average(&[-1.0, 1.0]), 0.0);
    assert!(average(&[]).is_nan(), "The mean of nothing is undefined.");
}

#[test]
fn test_dedupe() {
    assert_eq!(dedupe(&[1, 2, 3, 3, 4, 2]), [1, 2, 3, 4]);
    assert_eq!(
        dedupe(&[4, 1, 4, 2, 1]),
        [4, 1, 2],
        "First occurrences should determine the order."
    );
    assert_eq!(dedupe(&["a", "b", "a"]), ["a", "b"]);
    assert!(dedupe::<i32>(&[]).is_empty());
}

#[test]
fn test_reduce_with() {
    assert_eq!(reduce_with(&[1, 4, 3, 5, 2], Ord::max), Some(5));
    assert_eq!(reduce_with(&[2, 4, 3, 5, 1], Ord::min), Some(1));
    assert_eq!(reduce_with(&[7], Ord::max), Some(7), "A single element is its own extreme.");
    assert_eq!(reduce_with::<i32, _>(&[], Ord::min), None);
    assert_eq!(
        reduce_with(&[1, 2, 3], |a, b| a * 10 + b),
        Some(123),
        "The reduction should run left to right from the first element."
    );
}

#[test]
fn test_combine() {
    assert_eq!(combine(&[1, 4, 3, 5, 2], Combine::Sum), Some(15));
    assert_eq!(combine(&[2, 4, 3, 5, 1], Combine::Product), Some(120));
    assert_eq!(combine(&[], Combine::Sum), None);
    assert_eq!(combine(&[], Combine::Product), None);
    assert_eq!(combine(&[0, 7], Combine::Product), Some(0));
    assert_eq!(Combine::Sum.identity(), 0);
    assert_eq!(Combine::Product.identity(), 1);
}

#[test]
fn test_combine_wraps() {
    assert_eq!(
        combine(&[i32::MAX, 1], Combine::Sum),
        Some(i32::MIN),
        "Overflowing sums should wrap rather than panic."
    );
    assert_eq!(
        combine(&[65_536, 65_536], Combine::Product),
        Some(0),
        "2^32 should wrap to 0."
    );
    assert_eq!(Combine::Product.apply(i32::MIN, -1), i32::MIN);
}

#[test]
fn test_sum_of_squares() {
    let numbers = [1, 2, 3, 4];

    assert_eq!(sum_of_squares(&numbers, |n| n % 2 != 0), Some(10), "1 + 9 = 10");
    assert_eq!(sum_of_squares(&numbers, |n| n % 2 == 0), Some(20), "4 + 16 = 20");
    assert_eq!(sum_of_squares(&[], |n| n % 2 == 0), None);
    assert_eq!(
        sum_of_squares(&numbers, |n| n > 10),
        Some(0),
        "No matches in a non-empty collection should sum to 0."
    );
}

#[test]
fn test_sum_of_squares_wraps() {
    assert_eq!(
        sum_of_squares(&[50_000], |_| true),
        Some(50_000_i32.wrapping_mul(50_000)),
        "Overflowing squares should wrap rather than panic."
    );
    assert_eq!(
        sum_of_squares(&[46_340, 46_340], |_| true),
        Some(-176_096),
        "2 * 46340^2 exceeds i32::MAX, so the sum should wrap to 2 * 46340^2 - 2^32."
    );
}

#[test]
fn test_second_extreme() {
    assert_eq!(
        second_extreme(&[1, 10, 2, 9, 7, 10, 9], Extreme::Largest),
        Some(9),
        "The repeated maximum shouldn't be counted twice."
    );
    assert_eq!(
        second_extreme(&[1, 10, 2, 9, 7, 10, 1], Extreme::Smallest),
        Some(2)
    );
    assert_eq!(second_extreme(&[5, 5, 5], Extreme::Largest), None);
    assert_eq!(second_extreme::<i32>(&[], Extreme::Smallest), None);
    assert_eq!(second_extreme(&["b", "c", "a"], Extreme::Largest), Some("b"));
}
