//! # Comparison
//!
//! Total signed order: negatives sort below non-negatives and two negatives
//! compare by reversed magnitude. Together with the canonical zero this makes
//! `0 == -0` and gives exactly one of `<`, `==`, `>` for every pair. The
//! magnitude-only order the arithmetic works with is exposed separately as
//! [`Big::cmp_magnitude`].
//!
//! `>=`, `<=` and `!=` all derive from `cmp` and `eq`; they are never
//! implemented on their own, so their consistency holds by construction.
use std::cmp::Ordering;

use crate::integer::Big;
use crate::integer::sign::Sign;
use crate::integer::words;

impl Big {
    /// Compare magnitudes, ignoring both signs.
    ///
    /// The longer (trimmed) magnitude is the greater one; equal lengths compare
    /// word by word from the most significant end.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        words::cmp(self.magnitude(), other.magnitude())
    }
}

impl Ord for Big {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (Sign::Positive, Sign::Positive) => self.cmp_magnitude(other),
            (Sign::Negative, Sign::Negative) => other.cmp_magnitude(self),
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
        }
    }
}

impl PartialOrd for Big {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Big {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Big {}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use num::Zero;

    use crate::B;
    use crate::integer::Big;

    #[test]
    fn test_eq() {
        assert_eq!(B!(42), B!(42));
        assert_ne!(B!(42), B!(43));
        assert_ne!(B!(42), -B!(42));

        assert_eq!("0".parse::<Big>().unwrap(), "-0".parse::<Big>().unwrap());
        assert_eq!(-Big::zero(), Big::zero());
    }

    #[test]
    fn test_ord_magnitude() {
        assert!(B!(3) < B!(5));
        assert!(B!(5) > B!(3));

        // The longer magnitude wins regardless of low order words.
        let long = Big::from_words(&[9, 1, 0, 1, 0]).unwrap();
        let short = Big::from_words(&[10]).unwrap();
        assert!(long >= short);
        assert!(long > short);
        assert!(short <= long);

        // Equal lengths: the most significant difference decides.
        let a = Big::from_words(&[0, 2]).unwrap();
        let b = Big::from_words(&[u32::MAX, 1]).unwrap();
        assert!(a > b);
    }

    #[test]
    fn test_ord_signed() {
        assert!(-B!(5) < B!(3));
        assert!(B!(3) > -B!(5));
        assert!(-B!(5) < Big::zero());
        assert!(-B!(7) < -B!(5));
        assert!(-B!(5) > -B!(7));
    }

    #[test]
    fn test_ord_totality() {
        let values = [B!(0), B!(1), -B!(1), B!(5), -B!(5), Big::from_words(&[0, 1]).unwrap()];
        for a in &values {
            for b in &values {
                let relations = [a < b, a == b, a > b];
                assert_eq!(relations.iter().filter(|&&holds| holds).count(), 1);
            }
        }
    }

    #[test]
    fn test_cmp_magnitude() {
        assert_eq!(B!(5).cmp_magnitude(&-B!(5)), Ordering::Equal);
        assert_eq!((-B!(7)).cmp_magnitude(&B!(5)), Ordering::Greater);
        assert_eq!(B!(3).cmp_magnitude(&-B!(5)), Ordering::Less);
    }
}
