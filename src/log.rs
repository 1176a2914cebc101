//! Logging shims that compile away unless the `log` feature is enabled.
#![allow(unused_macros, unused_imports)]

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
    };
}

pub(crate) use {debug, trace};
