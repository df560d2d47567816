use catena::derivation::catena::reverse_bits;
use catena::hash::{Blake2b, Blake2b1, Digest, FastHash, Sha512};
use hex_literal::hex;

#[test]
fn blake2b_abc() {
    let mut h = Blake2b::new();
    let mut out = [0u8; 64];

    h.update(b"abc");
    h.finalize_into_reset(&mut out);

    assert_eq!(
        out,
        hex!(
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1"
            "7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
        )
    );
}

#[test]
fn sha512_abc_in_pieces() {
    let mut h = Sha512::new();
    let mut out = [0u8; 64];

    h.update_byte(b'a');
    h.update(b"bc");
    h.finalize_into_reset(&mut out);

    assert_eq!(
        out,
        hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
    );
}

#[test]
fn digest_resets_after_finalize() {
    let mut h = Blake2b::new();
    let mut first = [0u8; 64];
    let mut second = [0u8; 64];

    h.update(b"abc");
    h.finalize_into_reset(&mut first);
    h.update(b"abc");
    h.finalize_into_reset(&mut second);
    assert_eq!(first, second);

    h.update(b"discarded");
    h.reset();
    h.update(b"abc");
    h.finalize_into_reset(&mut second);
    assert_eq!(first, second);
}

#[test]
fn digest_output_sizes() {
    assert_eq!(Digest::output_size(&Blake2b::new()), 64);
    assert_eq!(Digest::output_size(&Sha512::new()), 64);
    assert_eq!(FastHash::output_size(&Blake2b1::new()), 64);
}

#[test]
fn blake2b_1_chains_until_reset() {
    let zeros = [0u8; 64];
    let mut fast = Blake2b1::new();
    let mut out = [0u8; 64];

    fast.hash(0, &zeros, &zeros, &mut out);
    assert_eq!(
        out,
        hex!(
            "f831fadf2f4a7441ab1c762907f93650c27f17b383cd1c1659cd367641cda544"
            "ac597637ed6b4da7506a25815e95a4df51aca732585f6bed3a16fd4b8506156c"
        )
    );

    fast.hash(1, &zeros, &zeros, &mut out);
    assert_eq!(
        out,
        hex!(
            "8d8e7d0f65034acff91a828b933ee24d28deb0e4e6fcfd1be818fde0b113e712"
            "49280d5008a9836a09320f9b33e58f6cf9e9e4497be824595a281075ff387a9f"
        )
    );

    fast.reset();
    fast.hash(0, &zeros, &zeros, &mut out);
    assert_eq!(out[..8], hex!("f831fadf2f4a7441"));
}

#[test]
fn blake2b_1_schedule_depends_on_vertex() {
    let a = [1u8; 64];
    let b = [2u8; 64];
    let mut out0 = [0u8; 64];
    let mut out1 = [0u8; 64];
    let mut out12 = [0u8; 64];

    Blake2b1::new().hash(0, &a, &b, &mut out0);
    Blake2b1::new().hash(1, &a, &b, &mut out1);
    Blake2b1::new().hash(12, &a, &b, &mut out12);

    assert_ne!(out0, out1);
    // twelve schedules, indexed modulo
    assert_eq!(out0, out12);
}

#[test]
fn reverse_bits_small_widths() {
    assert_eq!(reverse_bits(0b001, 3), 0b100);
    assert_eq!(reverse_bits(0b110, 3), 0b011);
    assert_eq!(reverse_bits(1, 1), 1);
    assert_eq!(reverse_bits(5, 0), 0);
    assert_eq!(reverse_bits(1, 63), 1 << 62);
}

#[test]
fn reverse_bits_is_an_involution() {
    for bits in 1..=10u8 {
        let mut seen = vec![false; 1 << bits];

        for i in 0..(1u64 << bits) {
            let j = reverse_bits(i, bits);
            assert!(j < (1 << bits));
            assert_eq!(reverse_bits(j, bits), i);
            seen[j as usize] = true;
        }

        assert!(seen.into_iter().all(|s| s));
    }
}
