#[cfg(feature = "tracing")]
macro_rules! fptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "fullpage", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fpdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "fullpage", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fpdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fpwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "fullpage", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fpwarn {
    ($($tt:tt)*) => {};
}
