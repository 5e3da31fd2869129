// Runtime configuration for the checksum demo, read from the environment

use log::warn;

use crate::table::{ECMA, ISO};

/// Demo configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    // Bytes of random data each worker checksums
    pub buffer_len: usize,

    // Reflected polynomial to checksum with
    pub polynomial: u64,

    // Number of worker threads sharing the table
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_len: 455_452,
            polynomial: ECMA,
            workers: num_cpus::get(),
        }
    }
}

impl Config {
    /// Build configuration from `CRC64_BUFFER_LEN`, `CRC64_POLY` and
    /// `CRC64_WORKERS`. Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("CRC64_BUFFER_LEN") {
            match raw.trim().parse::<usize>() {
                Ok(len) => config.buffer_len = len,
                Err(e) => warn!("ignoring CRC64_BUFFER_LEN={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup("CRC64_POLY") {
            match parse_polynomial(&raw) {
                Some(poly) => config.polynomial = poly,
                None => warn!("ignoring CRC64_POLY={raw:?}: expected iso, ecma or a number"),
            }
        }

        if let Some(raw) = lookup("CRC64_WORKERS") {
            match raw.trim().parse::<usize>() {
                Ok(0) => warn!("ignoring CRC64_WORKERS=0"),
                Ok(n) => config.workers = n,
                Err(e) => warn!("ignoring CRC64_WORKERS={raw:?}: {e}"),
            }
        }

        config
    }
}

/// Parse a polynomial name (`iso`, `ecma`) or a reflected polynomial given
/// as `0x`-prefixed hex or decimal.
pub fn parse_polynomial(raw: &str) -> Option<u64> {
    let raw = raw.trim();

    match raw.to_ascii_lowercase().as_str() {
        "iso" => Some(ISO),
        "ecma" => Some(ECMA),
        lower => match lower.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => lower.parse::<u64>().ok(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_polynomial() {
        assert_eq!(parse_polynomial("iso"), Some(ISO));
        assert_eq!(parse_polynomial(" ECMA "), Some(ECMA));
        assert_eq!(parse_polynomial("0xC96C5795D7870F42"), Some(ECMA));
        assert_eq!(parse_polynomial("0x42f0e1eba9ea3693"), Some(0x42F0E1EBA9EA3693));
        assert_eq!(parse_polynomial("27"), Some(27));
        assert_eq!(parse_polynomial("crc32"), None);
        assert_eq!(parse_polynomial("0x"), None);
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.polynomial, ECMA);
        assert!(config.workers >= 1);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CRC64_BUFFER_LEN", "1024"),
            ("CRC64_POLY", "iso"),
            ("CRC64_WORKERS", "3"),
        ]));
        assert_eq!(config.buffer_len, 1024);
        assert_eq!(config.polynomial, ISO);
        assert_eq!(config.workers, 3);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("CRC64_BUFFER_LEN", "lots"),
            ("CRC64_POLY", "md5"),
            ("CRC64_WORKERS", "0"),
        ]));
        assert_eq!(config, Config::default());
    }
}
