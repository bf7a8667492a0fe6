use super::*;

fn hex_out(data: &[u8], len: usize) -> String {
    let mut out = vec![0u8; len];
    shake256(&mut out, data);
    hex::encode(out)
}

#[test]
fn test_shake256_empty() {
    assert_eq!(
        hex_out(b"", 32),
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
    );
}

#[test]
fn test_shake256_abc() {
    assert_eq!(
        hex_out(b"abc", 64),
        "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739\
         d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4"
    );
}

#[test]
fn test_shake256_exact_rate_block() {
    // A full 136-byte block forces an extra permutation before padding
    assert_eq!(
        hex_out(&[0u8; SHAKE256_RATE], 32),
        "ea947b835fec1f9b0a7eabba901deb7881fd9999a1cbd5ccbb5a9afab7f6fe70"
    );
}

#[test]
fn test_shake256_multi_block_io() {
    let data: Vec<u8> = (0..200).map(|i| (i % 251) as u8).collect();
    let mut out = [0u8; 300];
    shake256(&mut out, &data);
    assert_eq!(
        hex::encode(&out[..32]),
        "4ee1ca03272b05d3bfb1e1c79a967f823b9fc5e4bb3987b1ba9e9cb5afb07a5e"
    );
    assert_eq!(
        hex::encode(&out[268..]),
        "c53c23e716c670c4db23c67901358ae64f3f0ccedfa05b29e84e1a11a635bfe7"
    );
}

#[test]
fn test_incremental_matches_one_shot() {
    let data: Vec<u8> = (0..200).map(|i| (i % 251) as u8).collect();
    let mut expected = [0u8; 300];
    shake256(&mut expected, &data);

    let mut xof = Shake256::new();
    for chunk in data.chunks(7) {
        xof.absorb(chunk).unwrap();
    }
    xof.pad().unwrap();

    // Squeeze in uneven pieces that straddle the rate boundary
    let mut got = Vec::new();
    for len in [1usize, 3, 131, 2, 100, 63] {
        let mut part = vec![0u8; len];
        xof.squeeze(&mut part).unwrap();
        got.extend_from_slice(&part);
    }
    assert_eq!(got, expected.to_vec());
}

#[test]
fn test_absorb_after_pad_fails() {
    let mut xof = Shake256::new();
    xof.absorb(b"sparrow").unwrap();
    xof.pad().unwrap();
    assert!(xof.absorb(b"more").is_err());

    // Padding twice is idempotent
    let mut a = [0u8; 16];
    xof.pad().unwrap();
    xof.squeeze(&mut a).unwrap();
    let mut b = [0u8; 16];
    shake256(&mut b, b"sparrow");
    assert_eq!(a, b);
}

#[test]
fn test_reset_and_generate() {
    let mut xof = Shake256::new();
    xof.absorb(b"junk").unwrap();
    xof.reset();
    xof.absorb(b"abc").unwrap();
    let out = xof.squeeze_into_vec(16).unwrap();
    assert_eq!(out, Shake256::generate(b"abc", 16).unwrap());
    assert!(Shake256::generate(b"abc", 0).is_err());
    assert_eq!(Shake256::security_level(), 256);
}
