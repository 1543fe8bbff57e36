use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const TRACKING_PREFIX: &str = "PKG";
pub const TRACKING_LEN: usize = 9;
pub const ORDER_PREFIX: &str = "ORD";
pub const ORDER_LEN: usize = 8;

/// `prefix` followed by `len` random characters from `[A-Z0-9]`.
pub fn code(rng: &mut impl Rng, prefix: &str, len: usize) -> String {
    let mut out = String::with_capacity(prefix.len() + len);
    out.push_str(prefix);
    for _ in 0..len {
        out.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
    }
    out
}

pub fn tracking_id(rng: &mut impl Rng) -> String {
    code(rng, TRACKING_PREFIX, TRACKING_LEN)
}

pub fn order_id(rng: &mut impl Rng) -> String {
    code(rng, ORDER_PREFIX, ORDER_LEN)
}

fn matches(s: &str, prefix: &str, len: usize) -> bool {
    s.strip_prefix(prefix).is_some_and(|rest| {
        rest.len() == len && rest.bytes().all(|b| ALPHABET.contains(&b))
    })
}

/// `PKG[A-Z0-9]{9}`
pub fn is_tracking_id(s: &str) -> bool {
    matches(s, TRACKING_PREFIX, TRACKING_LEN)
}

/// `ORD[A-Z0-9]{8}`
pub fn is_order_id(s: &str) -> bool {
    matches(s, ORDER_PREFIX, ORDER_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn generated_ids_match_their_patterns() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(is_tracking_id(&tracking_id(&mut rng)));
            assert!(is_order_id(&order_id(&mut rng)));
        }
    }

    #[test]
    fn pattern_rejects_near_misses() {
        assert!(!is_tracking_id("PKG12345678"));
        assert!(!is_tracking_id("PKG12345678a"));
        assert!(!is_tracking_id("ORD123456789"));
        assert!(is_tracking_id("PKGA1B2C3D4E"));
    }
}
