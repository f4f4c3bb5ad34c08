//! Logging facade: `defmt` on the device, `log` on the host, nothing otherwise

#![allow(unused_imports)]

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        pub(crate) use defmt::{debug, info, warn};
    } else if #[cfg(feature = "log")] {
        pub(crate) use log::{debug, info, warn};
    } else {
        pub(crate) use self::noop::{debug, info, warn};
    }
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
#[allow(unused_macros)]
mod noop {
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! info {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! warn {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {debug, info, warn};
}
