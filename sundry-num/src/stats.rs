//! Reductions and summary statistics over slices of numbers.

use num_traits::{AsPrimitive, Zero};

use crate::error::{Error, Result};

/// A number that can be summed and averaged.
///
/// Integers sum into an `i64` that wraps on overflow. Floats sum into an
/// `f64`. Averages and variances are always computed in `f64`.
pub trait Sample: Copy + PartialOrd + AsPrimitive<f64> {
    type Total: Copy + Zero;

    fn accumulate(total: Self::Total, value: Self) -> Self::Total;
}

macro_rules! integer_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                type Total = i64;

                fn accumulate(total: i64, value: Self) -> i64 {
                    total.wrapping_add(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! float_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                type Total = f64;

                fn accumulate(total: f64, value: Self) -> f64 {
                    total + f64::from(value)
                }
            }
        )*
    };
}

integer_sample!(i8, i16, i32, i64, u8, u16, u32);
float_sample!(f32, f64);

/// The smallest value. Ties and NaNs keep the earlier value.
pub fn min<T: Copy + PartialOrd>(values: &[T]) -> Result<T> {
    let (&first, rest) = values.split_first().ok_or(Error::EmptyInput)?;
    let mut smallest = first;
    for &value in rest {
        if value < smallest {
            smallest = value;
        }
    }
    Ok(smallest)
}

/// The largest value. Ties and NaNs keep the earlier value.
pub fn max<T: Copy + PartialOrd>(values: &[T]) -> Result<T> {
    let (&first, rest) = values.split_first().ok_or(Error::EmptyInput)?;
    let mut largest = first;
    for &value in rest {
        if value > largest {
            largest = value;
        }
    }
    Ok(largest)
}

/// The sum, or zero for no values.
pub fn sum<T: Sample>(values: &[T]) -> T::Total {
    let mut total = T::Total::zero();
    for &value in values {
        total = T::accumulate(total, value);
    }
    total
}

pub fn average<T: Sample>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    let total = values.iter().map(|value| value.as_()).sum::<f64>();
    Ok(total / values.len() as f64)
}

/// The population variance.
pub fn variance<T: Sample>(values: &[T]) -> Result<f64> {
    Ok(squared_deviations(values)? / values.len() as f64)
}

/// The sample variance, with Bessel's correction.
pub fn sample_variance<T: Sample>(values: &[T]) -> Result<f64> {
    if values.len() < 2 {
        return Err(Error::InsufficientSamples {
            required: 2,
            actual: values.len(),
        });
    }
    Ok(squared_deviations(values)? / (values.len() - 1) as f64)
}

pub fn std_dev<T: Sample>(values: &[T]) -> Result<f64> {
    variance(values).map(f64::sqrt)
}

pub fn sample_std_dev<T: Sample>(values: &[T]) -> Result<f64> {
    sample_variance(values).map(f64::sqrt)
}

fn squared_deviations<T: Sample>(values: &[T]) -> Result<f64> {
    let mean = average(values)?;
    Ok(values
        .iter()
        .map(|value| {
            let deviation = value.as_() - mean;
            deviation * deviation
        })
        .sum())
}
