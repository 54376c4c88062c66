// Logging is compiled out entirely unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
macro_rules! ilog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "infinite_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ilog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! itrace {
    ($($tt:tt)*) => { ilog!(trace, $($tt)*) };
}

macro_rules! idebug {
    ($($tt:tt)*) => { ilog!(debug, $($tt)*) };
}

macro_rules! iwarn {
    ($($tt:tt)*) => { ilog!(warn, $($tt)*) };
}
