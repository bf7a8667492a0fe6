// tests/src/suites/kat/loader.rs
//! Loads known-answer vectors from `src/vectors`

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{KatError, Result};
use super::model::{KatFile, SEED_BYTES};

use sparrow_kem::sparrow::{CIPHERTEXT_BYTES, SHARED_SECRET_BYTES};

const DIGEST_BYTES: usize = 32;

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

fn check(field: &'static str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(KatError::FieldLength {
            field,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Parses a vector file from a JSON string and checks field sizes
pub fn parse(json: &str) -> Result<KatFile> {
    let file: KatFile = serde_json::from_str(json)?;
    for v in &file.vectors {
        check("seed", &v.seed, SEED_BYTES)?;
        check("pk_a_digest", &v.pk_a_digest, DIGEST_BYTES)?;
        check("sk_a_digest", &v.sk_a_digest, DIGEST_BYTES)?;
        check("pk_b_digest", &v.pk_b_digest, DIGEST_BYTES)?;
        check("sk_b_digest", &v.sk_b_digest, DIGEST_BYTES)?;
        check("ct", &v.ct, CIPHERTEXT_BYTES)?;
        check("ss", &v.ss, SHARED_SECRET_BYTES)?;
    }
    Ok(file)
}

/// Loads `src/vectors/<name>`
pub fn load(name: &str) -> Result<KatFile> {
    let path = vectors_dir().join(name);
    let json = fs::read_to_string(&path)?;
    parse(&json)
}

/// Loads the bundled Sparrow-128-1 vectors
pub fn load_sparrow128() -> Result<KatFile> {
    load("sparrow_kat.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_file_parses() {
        let file = load_sparrow128().unwrap();
        assert_eq!(file.algorithm, "Sparrow-128-1");
        assert!(!file.vectors.is_empty());
        assert_eq!(file.vectors[0].seed, (0u8..48).collect::<Vec<_>>());
    }

    #[test]
    fn short_field_is_reported() {
        let json = r#"{"algorithm":"x","vectors":[{"count":0,"seed":"00",
            "pk_a_digest":"","sk_a_digest":"","pk_b_digest":"","sk_b_digest":"",
            "ct":"","ss":"","rng_bytes":0}]}"#;
        match parse(json) {
            Err(KatError::FieldLength { field, expected, actual }) => {
                assert_eq!((field, expected, actual), ("seed", 48, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn bad_hex_is_reported() {
        let json = r#"{"algorithm":"x","vectors":[{"count":0,"seed":"zz",
            "pk_a_digest":"","sk_a_digest":"","pk_b_digest":"","sk_b_digest":"",
            "ct":"","ss":"","rng_bytes":0}]}"#;
        assert!(matches!(parse(json), Err(KatError::Json(_))));
    }
}
