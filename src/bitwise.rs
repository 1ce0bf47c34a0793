//! Bit-manipulation exercises on 32-bit words.

use crate::error::{Error, Result};

/// Number of set bits, dropping the lowest one each step. $O(k)$ in the
/// number of set bits.
pub fn count_bits(mut x: u32) -> u32 {
    let mut count = 0;
    while x != 0 {
        count += 1;
        x &= x - 1;
    }
    count
}

/// 1 if `x` has an odd number of set bits, else 0. $O(\log w)$.
pub fn parity(mut x: u32) -> u32 {
    let mut shift = u32::BITS / 2;
    while shift > 0 {
        x ^= x >> shift;
        shift >>= 1;
    }
    x & 1
}

/// Swap bits `i` and `j` of `x`.
pub fn swap_bits(x: u32, i: u32, j: u32) -> u32 {
    if ((x >> i) ^ (x >> j)) & 1 != 0 {
        x ^ ((1 << i) | (1 << j))
    } else {
        x
    }
}

/// Reverse the bit order of `x`.
pub fn reverse_bits(mut x: u32) -> u32 {
    for i in 0..u32::BITS / 2 {
        x = swap_bits(x, i, u32::BITS - 1 - i);
    }
    x
}

/// The integer closest to `x` with the same number of set bits.
///
/// Swaps the two lowest differing adjacent bits. `None` for `0` and
/// `u32::MAX`, which have no other integer of equal weight.
pub fn closest_same_weight(x: u32) -> Option<u32> {
    (0..u32::BITS - 1)
        .find(|&i| ((x >> i) ^ (x >> (i + 1))) & 1 != 0)
        .map(|i| x ^ ((1 << i) | (1 << (i + 1))))
}

/// Multiply using only shifts and additions. Wraps on overflow.
pub fn multiply(mut a: u32, mut b: u32) -> u32 {
    let mut product = 0u32;
    while b != 0 {
        if b & 1 != 0 {
            product = product.wrapping_add(a);
        }
        a <<= 1;
        b >>= 1;
    }
    product
}

/// Integer division using only shifts and subtractions.
///
/// Subtracts the largest `b << k` not exceeding the remainder each round.
pub fn divide(a: u32, b: u32) -> Result<u32> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    let mut rest = u64::from(a);
    let divisor = u64::from(b);
    let mut power = u32::BITS;
    let mut shifted = divisor << power;
    let mut quotient = 0u32;
    while rest >= divisor {
        while shifted > rest {
            shifted >>= 1;
            power -= 1;
        }
        quotient |= 1 << power;
        rest -= shifted;
    }
    Ok(quotient)
}

/// Reverse the decimal digits of `x`. Widened, since the reversal of a
/// `u32` need not fit one.
pub fn reverse_digits(mut x: u32) -> u64 {
    let mut reversed = 0u64;
    while x != 0 {
        reversed = reversed * 10 + u64::from(x % 10);
        x /= 10;
    }
    reversed
}

/// `x` raised to the integer power `m`, by repeated squaring. $O(\log m)$.
pub fn power(x: f64, m: i32) -> Result<f64> {
    if x < 0.0 {
        return Err(Error::NegativeBase);
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    let mut base = if m < 0 { 1.0 / x } else { x };
    let mut exp = m.unsigned_abs();
    let mut result = 1.0;
    while exp > 0 {
        if exp & 1 != 0 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    Ok(result)
}

/// True if the decimal representation of `x` reads the same both ways.
pub fn is_palindrome(x: u32) -> bool {
    u64::from(x) == reverse_digits(x)
}
