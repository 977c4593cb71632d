use sha2::{Digest, Sha256};

pub fn meters_to_km(meters: f64) -> f64 {
    let km = meters / 1000.0;
    (km * 100.0).round() / 100.0
}

pub fn mps_to_kmh(mps: f64) -> f64 {
    let kmh = mps * 3.6;
    (kmh * 100.0).round() / 100.0
}

pub fn hash_string(string: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meters_to_km_converts_and_rounds() {
        assert_eq!(meters_to_km(1000.0), 1.0);
        assert_eq!(meters_to_km(12340.0), 12.34);
        assert_eq!(meters_to_km(0.0), 0.0);
    }

    #[test]
    fn mps_to_kmh_converts_and_rounds() {
        assert_eq!(mps_to_kmh(5000.0), 18000.0);
        assert_eq!(mps_to_kmh(5.43), 19.55);
    }

    #[test]
    fn hash_string_is_a_stable_hex_digest() {
        let digest = hash_string("secret");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, hash_string("secret"));
    }
}
