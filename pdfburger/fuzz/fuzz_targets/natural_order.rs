#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfburger::sort::natural_cmp;
use std::cmp::Ordering;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let mut parts = s.splitn(3, '\n');
    let a = parts.next().unwrap_or("");
    let b = parts.next().unwrap_or("");
    let c = parts.next().unwrap_or("");

    // Total order: reflexive, antisymmetric, equal only when identical.
    assert_eq!(natural_cmp(a, a), Ordering::Equal);
    assert_eq!(natural_cmp(a, b), natural_cmp(b, a).reverse());
    assert_eq!(natural_cmp(a, b) == Ordering::Equal, a == b);

    // Transitivity.
    if natural_cmp(a, b) != Ordering::Greater && natural_cmp(b, c) != Ordering::Greater {
        assert_ne!(natural_cmp(a, c), Ordering::Greater);
    }
});
