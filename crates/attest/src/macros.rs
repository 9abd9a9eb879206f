// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Assertion macros: the zero-cost entry points.
//!
//! Each macro guards its expansion with [`crate::ACTIVE`], so in an elided
//! build the argument expressions are never evaluated at runtime — a call
//! like `attest::equal!(queue.pop(), expected)` performs no work at all —
//! while call sites stay borrow- and type-checked identically in both
//! modes. The guarded call goes through [`crate::checks`], the strategy
//! module selected by the `enforce` feature.
//!
//! Every macro takes an optional trailing `format!`-style context message:
//!
//! ```
//! let limit = 8;
//! attest::less!(3, limit);
//! attest::less!(3, limit, "index out of range (limit {})", limit);
//! ```

/// Asserts strict equality of two values. See [`checks::equal`](crate::checks::equal).
#[macro_export]
macro_rules! equal {
    ($expected:expr, $actual:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::equal($expected, $actual);
        }
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::equal_msg($expected, $actual, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts strict inequality of two values.
#[macro_export]
macro_rules! not_equal {
    ($expected:expr, $actual:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::not_equal($expected, $actual);
        }
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::not_equal_msg($expected, $actual, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts type-coercing equality (`123u32` equals `123i64`).
#[macro_export]
macro_rules! equal_values {
    ($expected:expr, $actual:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::equal_values($expected, $actual);
        }
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::equal_values_msg($expected, $actual, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that two values differ even after type coercion.
#[macro_export]
macro_rules! not_equal_values {
    ($expected:expr, $actual:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::not_equal_values($expected, $actual);
        }
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::not_equal_values_msg($expected, $actual, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts equality of the exported-field projections of two values.
#[macro_export]
macro_rules! equal_exported {
    ($expected:expr, $actual:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::equal_exported($expected, $actual);
        }
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::equal_exported_msg($expected, $actual, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts `left > right`.
#[macro_export]
macro_rules! greater {
    ($left:expr, $right:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::greater($left, $right);
        }
    };
    ($left:expr, $right:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::greater_msg($left, $right, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts `left >= right`.
#[macro_export]
macro_rules! greater_or_equal {
    ($left:expr, $right:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::greater_or_equal($left, $right);
        }
    };
    ($left:expr, $right:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::greater_or_equal_msg($left, $right, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts `left < right`.
#[macro_export]
macro_rules! less {
    ($left:expr, $right:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::less($left, $right);
        }
    };
    ($left:expr, $right:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::less_msg($left, $right, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts `left <= right`.
#[macro_export]
macro_rules! less_or_equal {
    ($left:expr, $right:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::less_or_equal($left, $right);
        }
    };
    ($left:expr, $right:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::less_or_equal_msg($left, $right, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a numeric value is strictly positive.
#[macro_export]
macro_rules! positive {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::positive($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::positive_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a numeric value is strictly negative.
#[macro_export]
macro_rules! negative {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::negative($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::negative_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a sequence is strictly increasing.
#[macro_export]
macro_rules! increasing {
    ($sequence:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::increasing($sequence);
        }
    };
    ($sequence:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::increasing_msg($sequence, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a sequence is strictly decreasing.
#[macro_export]
macro_rules! decreasing {
    ($sequence:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::decreasing($sequence);
        }
    };
    ($sequence:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::decreasing_msg($sequence, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a sequence never decreases.
#[macro_export]
macro_rules! non_decreasing {
    ($sequence:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::non_decreasing($sequence);
        }
    };
    ($sequence:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::non_decreasing_msg($sequence, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a sequence never increases.
#[macro_export]
macro_rules! non_increasing {
    ($sequence:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::non_increasing($sequence);
        }
    };
    ($sequence:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::non_increasing_msg($sequence, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a container holds an element.
#[macro_export]
macro_rules! contains {
    ($container:expr, $element:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::contains($container, $element);
        }
    };
    ($container:expr, $element:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::contains_msg($container, $element, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a container does not hold an element.
#[macro_export]
macro_rules! not_contains {
    ($container:expr, $element:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::not_contains($container, $element);
        }
    };
    ($container:expr, $element:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::not_contains_msg($container, $element, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that `candidate` is a (multiset) subset of `list`.
#[macro_export]
macro_rules! subset {
    ($list:expr, $candidate:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::subset($list, $candidate);
        }
    };
    ($list:expr, $candidate:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::subset_msg($list, $candidate, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that `candidate` is not a subset of `list`.
#[macro_export]
macro_rules! not_subset {
    ($list:expr, $candidate:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::not_subset($list, $candidate);
        }
    };
    ($list:expr, $candidate:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::not_subset_msg($list, $candidate, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that two sequences hold the same multiset of elements.
#[macro_export]
macro_rules! elements_match {
    ($left:expr, $right:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::elements_match($left, $right);
        }
    };
    ($left:expr, $right:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::elements_match_msg($left, $right, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that two sequences hold different multisets of elements.
#[macro_export]
macro_rules! not_elements_match {
    ($left:expr, $right:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::not_elements_match($left, $right);
        }
    };
    ($left:expr, $right:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::not_elements_match_msg($left, $right, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a lock is currently held.
#[macro_export]
macro_rules! locked {
    ($lock:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::locked($lock);
        }
    };
    ($lock:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::locked_msg($lock, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a lock is currently free.
#[macro_export]
macro_rules! unlocked {
    ($lock:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::unlocked($lock);
        }
    };
    ($lock:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::unlocked_msg($lock, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a value is empty.
#[macro_export]
macro_rules! empty {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::empty($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::empty_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a value is not empty.
#[macro_export]
macro_rules! not_empty {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::not_empty($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::not_empty_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a measurable container has exactly the expected length.
#[macro_export]
macro_rules! length {
    ($container:expr, $expected:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::length($container, $expected);
        }
    };
    ($container:expr, $expected:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::length_msg($container, $expected, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a scalar equals its zero value.
#[macro_export]
macro_rules! zero {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::zero($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::zero_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a scalar does not equal its zero value.
#[macro_export]
macro_rules! not_zero {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::not_zero($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::not_zero_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that two numerics differ by at most `delta` (absolute).
#[macro_export]
macro_rules! in_delta {
    ($expected:expr, $actual:expr, $delta:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::in_delta($expected, $actual, $delta);
        }
    };
    ($expected:expr, $actual:expr, $delta:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::in_delta_msg($expected, $actual, $delta, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that `actual` is within relative error `epsilon` of `expected`.
#[macro_export]
macro_rules! in_epsilon {
    ($expected:expr, $actual:expr, $epsilon:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::in_epsilon($expected, $actual, $epsilon);
        }
    };
    ($expected:expr, $actual:expr, $epsilon:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::in_epsilon_msg(
                $expected,
                $actual,
                $epsilon,
                ::core::format_args!($($msg)+),
            );
        }
    };
}

/// Asserts that two instants are within `delta` of each other.
#[macro_export]
macro_rules! within_duration {
    ($expected:expr, $actual:expr, $delta:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::within_duration($expected, $actual, $delta);
        }
    };
    ($expected:expr, $actual:expr, $delta:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::within_duration_msg(
                $expected,
                $actual,
                $delta,
                ::core::format_args!($($msg)+),
            );
        }
    };
}

/// Asserts that a result is `Ok`.
#[macro_export]
macro_rules! ok {
    ($result:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::ok($result);
        }
    };
    ($result:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::ok_msg($result, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a result is `Err`.
#[macro_export]
macro_rules! err {
    ($result:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::err($result);
        }
    };
    ($result:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::err_msg($result, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a result is `Err` and its message contains `needle`.
#[macro_export]
macro_rules! err_contains {
    ($result:expr, $needle:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::err_contains($result, $needle);
        }
    };
    ($result:expr, $needle:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::err_contains_msg($result, $needle, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a condition is true.
#[macro_export]
macro_rules! is_true {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::is_true($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::is_true_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Asserts that a condition is false.
#[macro_export]
macro_rules! is_false {
    ($value:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::is_false($value);
        }
    };
    ($value:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::is_false_msg($value, ::core::format_args!($($msg)+));
        }
    };
}

/// Reports an unconditional assertion failure.
#[macro_export]
macro_rules! fail {
    ($message:expr $(,)?) => {
        if $crate::ACTIVE {
            $crate::checks::fail($message);
        }
    };
    ($message:expr, $($msg:tt)+) => {
        if $crate::ACTIVE {
            $crate::checks::fail_msg($message, ::core::format_args!($($msg)+));
        }
    };
}
