/// Shorthand for creating a big integer from an unsigned machine integer in
/// tests. The widening conversion is lossless; signed or truncating inputs are
/// rejected at compile time.
#[macro_export]
macro_rules! B {
    ($value:literal) => {
        $crate::Big::from($value as u64)
    };
    ($value:expr) => {
        $crate::Big::from(u64::from($value))
    };
}
