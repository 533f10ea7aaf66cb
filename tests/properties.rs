//! Algebraic laws over a fixed grid of values, exercised through the public
//! surface only.
use num::{One, Zero};

use rebi::Big;

/// Values picked to cover zero, small values, word boundaries, multi-word
/// magnitudes and both signs.
fn grid() -> Vec<Big> {
    let texts = [
        "0",
        "1",
        "2",
        "9",
        "4294967295",
        "4294967296",
        "18446744073709551615",
        "123456789012345678901234567890",
        "-1",
        "-4294967296",
        "-123456789012345678901234567890",
    ];

    texts.iter().map(|text| text.parse::<Big>().unwrap()).collect()
}

#[test]
fn addition_is_commutative() {
    let values = grid();
    for a in &values {
        for b in &values {
            assert_eq!(a + b, b + a, "{} + {}", a, b);
        }
    }
}

#[test]
fn multiplication_is_commutative() {
    let values = grid();
    for a in &values {
        for b in &values {
            assert_eq!(a * b, b * a, "{} * {}", a, b);
        }
    }
}

#[test]
fn addition_is_associative() {
    let values = grid();
    for a in &values {
        for b in &values {
            for c in &values {
                assert_eq!(&(a + b) + c, a + &(b + c), "{} + {} + {}", a, b, c);
            }
        }
    }
}

#[test]
fn identities() {
    let values = grid();
    for a in &values {
        assert_eq!(a + Big::zero(), *a);
        assert_eq!(a * Big::one(), *a);
        assert!((a * Big::zero()).is_zero());
    }
}

#[test]
fn subtraction_inverts_addition() {
    let values = grid();
    for a in &values {
        for b in &values {
            assert_eq!(&(a + b) - b, *a, "({} + {}) - {}", a, b, b);
        }
    }
}

#[test]
fn ordering_is_total() {
    let values = grid();
    for a in &values {
        for b in &values {
            let relations = [a < b, a == b, a > b];
            assert_eq!(
                relations.iter().filter(|&&holds| holds).count(), 1,
                "{} versus {}", a, b,
            );
        }
    }
}

#[test]
fn complement_is_an_involution() {
    // Complementing turns an all-ones top word into a zero word that the
    // canonical form trims away, so the double complement of such a magnitude
    // comes back shorter. The involution therefore holds exactly for
    // magnitudes whose top word is not all ones.
    let values = [
        "0",
        "1",
        "9",
        "4294967294",
        "4294967296",
        "123456789012345678901234567890",
    ];
    for text in &values {
        let a = text.parse::<Big>().unwrap();
        assert_eq!(!!a.clone(), a, "{}", a);
    }
}

#[test]
fn complement_trims_an_all_ones_top_word() {
    let a = "18446744073709551615".parse::<Big>().unwrap();
    assert_eq!(a.word_count(), 2);

    // !a is [0, 0], canonically zero; complementing again gives a single
    // all-ones word, one word shorter than the input.
    let complement = !a.clone();
    assert!(complement.is_zero());
    assert_eq!(!complement, "4294967295".parse::<Big>().unwrap());
}

#[test]
fn decimal_round_trip() {
    let values = grid();
    for a in &values {
        let text = a.to_string();
        assert_eq!(text.parse::<Big>().unwrap(), *a);
    }
}
