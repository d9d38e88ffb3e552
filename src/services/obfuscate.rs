//! Maskering av dokumentbilder
//!
//! Reversibel kodning som gör lagrade pass- och visumbilder oläsliga
//! vid okulär inspektion av lagret. OBS: detta är inte kryptografi;
//! den som kommer åt lagret kan trivialt avkoda innehållet. Formatet
//! behålls som det är för att befintliga poster ska förbli läsbara.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Prefix som markerar en maskerad nyttolast
pub const MARKER: &str = "encrypted:";

/// Maskera en nyttolast: `encrypted:` + base64
pub fn encode(payload: &str) -> String {
    format!("{}{}", MARKER, STANDARD.encode(payload.as_bytes()))
}

/// Avkoda ett lagrat värde.
///
/// - Saknas markören returneras värdet oförändrat (äldre poster
///   lagrades omaskerade).
/// - Trasig base64 eller icke-UTF-8 ger `None`; anroparen ska visa
///   "kan inte visas" i stället för en trasig bild.
pub fn decode(value: &str) -> Option<String> {
    let Some(encoded) = value.strip_prefix(MARKER) else {
        return Some(value.to_string());
    };

    let bytes = match STANDARD.decode(encoded) {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(error = %e, "Maskerad nyttolast kunde inte avkodas");
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(error = %e, "Avkodad nyttolast är inte giltig text");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let payloads = [
            "",
            "data:image/jpeg;base64,/9j/4AAQSkZJRg==",
            "åäö och 日本語",
            "encrypted: ser ut som markören men är nyttolast",
        ];
        for payload in payloads {
            assert_eq!(decode(&encode(payload)).as_deref(), Some(payload));
        }
    }

    #[test]
    fn test_unmarked_value_passes_through() {
        assert_eq!(decode("data:image/png;base64,AAAA").as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(decode("").as_deref(), Some(""));
    }

    #[test]
    fn test_malformed_base64_yields_none() {
        assert!(decode("encrypted:!!!inte base64!!!").is_none());
    }

    #[test]
    fn test_encoded_value_hides_payload() {
        let encoded = encode("data:image/jpeg;base64,/9j/AAAA");
        assert!(encoded.starts_with(MARKER));
        assert!(!encoded.contains("data:image"));
    }
}
