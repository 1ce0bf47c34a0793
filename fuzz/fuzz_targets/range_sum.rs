#![no_main]
use fenrank::{count_range_sum, count_smaller_to_right};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<i32>, i64, i64)| {
    let (mut values, a, b) = data;
    values.truncate(256);
    let (lower, upper) = (a.min(b), a.max(b));

    let mut expected = 0usize;
    for i in 0..values.len() {
        let mut sum = 0i64;
        for &v in &values[i..] {
            sum += i64::from(v);
            if lower <= sum && sum <= upper {
                expected += 1;
            }
        }
    }
    assert_eq!(count_range_sum(&values, lower, upper).unwrap(), expected);

    let counts = count_smaller_to_right(&values);
    for (i, &c) in counts.iter().enumerate() {
        let brute = values[i + 1..].iter().filter(|&&v| v < values[i]).count();
        assert_eq!(c, brute, "position {}", i);
    }

    if lower < upper {
        assert!(count_range_sum(&values, upper, upper).unwrap() <= expected);
    }
});
