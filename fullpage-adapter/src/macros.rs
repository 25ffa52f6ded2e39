#[cfg(feature = "tracing")]
macro_rules! fptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "fullpage_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fpwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "fullpage_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fpwarn {
    ($($tt:tt)*) => {};
}
