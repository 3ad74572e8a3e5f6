/// Number formatting for display.
///
/// A pure function turning an `f64` into the string shown in steps and
/// messages. There is no global formatter; every caller passes the precision
/// it wants.
pub mod format;
