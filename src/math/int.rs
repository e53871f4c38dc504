use core::ops::{Add, Mul, Sub};
use num_traits::{Euclid, One, Zero};
use std::borrow::Borrow;

pub trait BaseInt:
    Clone
    + Ord
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Euclid
    + std::fmt::Debug
{
}
impl<T> BaseInt for T where
    T: Clone
        + Ord
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Euclid
        + std::fmt::Debug
{
}

/// Greatest common divisor of two non-negative integers. `gcd(0, 0) == 0`.
pub fn gcd<I: BaseInt>(a: impl Borrow<I>, b: impl Borrow<I>) -> I {
    let (mut a, mut b) = (a.borrow().clone(), b.borrow().clone());
    while !b.is_zero() {
        let r = a.rem_euclid(&b);
        a = b;
        b = r;
    }
    a
}

/// Least common multiple; zero if either argument is zero.
pub fn lcm<I: BaseInt>(a: impl Borrow<I>, b: impl Borrow<I>) -> I {
    let (a, b) = (a.borrow(), b.borrow());
    if a.is_zero() || b.is_zero() {
        return I::zero();
    }
    // divide first to keep the intermediate small
    a.div_euclid(&gcd::<I>(a, b)) * b.clone()
}

/// LCM of every element. An empty slice yields zero.
pub fn lcm_all<I: BaseInt>(nums: &[I]) -> I {
    match nums.split_first() {
        None => I::zero(),
        Some((first, rest)) => rest
            .iter()
            .fold(first.clone(), |acc, n| lcm::<I>(&acc, n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd::<u64>(12, 18), 6);
        assert_eq!(gcd::<u64>(17, 5), 1);
        assert_eq!(gcd::<u64>(0, 9), 9);
        assert_eq!(gcd::<u64>(9, 0), 9);
        assert_eq!(gcd::<i64>(&48, &36), 12);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm::<u64>(4, 6), 12);
        assert_eq!(lcm::<u64>(0, 6), 0);
        assert_eq!(lcm::<u64>(21, 6), 42);
    }

    #[test]
    fn test_lcm_all() {
        assert_eq!(lcm_all::<u64>(&[]), 0);
        assert_eq!(lcm_all(&[7u64]), 7);
        assert_eq!(lcm_all(&[2u64, 3, 4, 5]), 60);
        // periods large enough that multiplying before dividing would overflow u32
        assert_eq!(lcm_all(&[65_521u64 * 3, 65_521 * 5]), 65_521 * 15);
    }
}
