//! Level-gated assertions. Cheap checks run at [`LMAX_ASSERT_SIMPLE`]; checks which rescan solver
//! state only run once the `debug-checks` feature raises the level.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const LMAX_ASSERT_LEVEL_DEFINITION: u8 = LMAX_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const LMAX_ASSERT_LEVEL_DEFINITION: u8 = LMAX_ASSERT_MODERATE;

pub const LMAX_ASSERT_SIMPLE: u8 = 1;
pub const LMAX_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! lmax_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::LMAX_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LMAX_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! lmax_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::LMAX_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LMAX_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! lmax_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::LMAX_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LMAX_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
