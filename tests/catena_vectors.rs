use catena::hash::Sha512;
use catena::{Catena, CatenaParams, Topology};
use hex_literal::hex;

fn params(lambda: u8, min_garlic: u8, garlic: u8, hashlen: usize) -> CatenaParams {
    CatenaParams {
        lambda,
        min_garlic,
        garlic,
        hashlen,
    }
}

fn hash(catena: &mut Catena, salt: &[u8], data: Option<&[u8]>, params: &CatenaParams) -> Vec<u8> {
    let mut password = *b"password";
    catena
        .hash_password(&mut password, salt, data, params)
        .unwrap()
}

// -------------------------------------------------------
// Regression vectors at garlic 10, all four instances
// -------------------------------------------------------

#[test]
fn dragonfly_garlic_10() {
    let out = hash(&mut Catena::dragonfly(), b"salt", None, &params(2, 10, 10, 64));

    assert_eq!(
        out,
        hex!(
            "c116d6032ec47c6df6fe788207907e0e307247c50d5715bbfaa3948b57277a56"
            "033895ca7ba1168fb4786ed470db203bf5e1095cbc434cad58f94d3984e60c3c"
        )
    );
}

#[test]
fn dragonfly_full_garlic_10() {
    let out = hash(&mut Catena::dragonfly_full(), b"salt", None, &params(2, 10, 10, 64));

    assert_eq!(
        out,
        hex!(
            "bfb46f72995f97ec39a2914a7c9dd2040a72cf13ff0389a108ddf335607ed419"
            "28f2db8fad45c0f5d2dbd1f06c1786bab7ace9cf09b2a4700490cd33b5c6796c"
        )
    );
}

#[test]
fn butterfly_garlic_10() {
    let out = hash(&mut Catena::butterfly(), b"salt", None, &params(2, 10, 10, 64));

    assert_eq!(
        out,
        hex!(
            "798da43d85d6ec3ea3ac0637bd93bad8a18f6a2cd9e0372d5e7ac18e9ffd7166"
            "bd2fe82850c8b74a63b09155756a11a57cc1defbb8ec095f958576842d27d3a8"
        )
    );
}

#[test]
fn butterfly_full_garlic_10() {
    let out = hash(&mut Catena::butterfly_full(), b"salt", None, &params(2, 10, 10, 64));

    assert_eq!(
        out,
        hex!(
            "fa07138327758c2a17bb6801ac849fb3b054bf60068d9c3c746a0cc7a9daa344"
            "fc507e04b047b0603dc25b7b3a4f44464e5cbb5215115b9d0feb5c60be2bc0f0"
        )
    );
}

// -------------------------------------------------------
// Associated data, garlic ranges and truncated output
// -------------------------------------------------------

#[test]
fn dragonfly_with_data_and_garlic_range() {
    let out = hash(
        &mut Catena::dragonfly(),
        b"saltsaltsaltsalt",
        Some(b"data"),
        &params(2, 8, 9, 32),
    );

    assert_eq!(
        out,
        hex!("70a0cec83329cc00b6c48c3ebc396f6afa783525b9a6966cfac79601440f3848")
    );
}

#[test]
fn butterfly_with_data_and_odd_depth() {
    let out = hash(
        &mut Catena::butterfly(),
        b"saltsaltsaltsalt",
        Some(b"data"),
        &params(3, 8, 9, 32),
    );

    assert_eq!(
        out,
        hex!("b025706539e490f471391419757011c79e348699fb04720e93a50ebe37e938ce")
    );
}

#[test]
fn dragonfly_with_public_input() {
    let mut password = *b"password";
    let out = Catena::dragonfly()
        .hash_password_with_public_input(
            &mut password,
            b"salt",
            Some(b"public input"),
            None,
            &params(1, 9, 9, 48),
        )
        .unwrap();

    assert_eq!(
        out,
        hex!(
            "c89a1a792efaa6ccf4f86f3ed8533f70d2e0c73af5d22ccf025898703bd12eb7"
            "8826854b2bbf7775ff7aef75a82213a1"
        )
    );
}

#[test]
fn butterfly_full_over_sha512() {
    let mut catena =
        Catena::<Sha512, catena::hash::Blake2b1>::new(Topology::DoubleButterfly, Sha512::new(), None)
            .unwrap();
    let mut password = *b"password";
    let out = catena
        .hash_password(&mut password, b"salt", None, &params(2, 8, 8, 64))
        .unwrap();

    assert_eq!(
        out,
        hex!(
            "ceb75f97c76e5b71b80ea7951f28f21969007cab8e3892dc8c38864b87e1294f"
            "e44356c1bf9ba23dbd71970c7cf7305573b1db59760419dca42ee931c888632c"
        )
    );
}

// -------------------------------------------------------
// Smallest memory: garlic 0 and 1
// -------------------------------------------------------

#[test]
fn dragonfly_from_garlic_0() {
    let out = hash(&mut Catena::dragonfly(), b"salt", None, &params(3, 0, 2, 64));

    assert_eq!(
        out,
        hex!(
            "3cef5a1aab668329d5f145a46eea9ed2ba242dcb5edb0954a908a27c28fdbe3f"
            "09b509ae83b36c16d00f8de444537c333049e7009772cf3cb4d7427da7a4ff27"
        )
    );
}

#[test]
fn butterfly_from_garlic_0() {
    let out = hash(&mut Catena::butterfly(), b"salt", None, &params(1, 0, 1, 64));

    assert_eq!(
        out,
        hex!(
            "5f2bdda5da627dbbe3e0f31d5c026f69b6ca62eb1478da9bca27b67f1f2c5dd8"
            "b34135285bbb96714ca806cc462cafe96b99bfebae6e0ccc53d43eb399b04140"
        )
    );
}

// -------------------------------------------------------
// Key derivation and keyed hashing
// -------------------------------------------------------

#[test]
fn dragonfly_derive_key_100_bytes() {
    let mut password = *b"password";
    let key = Catena::dragonfly()
        .derive_key(&mut password, b"salt", None, None, &params(2, 8, 8, 0), 7, 100)
        .unwrap();

    assert_eq!(
        key,
        hex!(
            "ce4922ecf3c7e4be9f67c8eea9abc65bae1acd807b42011f6e246d873a9a685e"
            "e8dd959b3af5c5d93bcacc8aa9646028c54fc2a04de772b21e01d9040c7ad78b"
            "61d534125a03ec391236e574b8b9f8da522a4b207bd2aaebbcb6104c4e3f8fdf"
            "48c4e172"
        )
    );
}

#[test]
fn dragonfly_keyed_hash() {
    let key: Vec<u8> = (0u8..16).collect();
    let mut password = *b"password";
    let out = Catena::dragonfly()
        .keyed_hash(&mut password, b"salt", None, &params(2, 8, 8, 64), &key, 42)
        .unwrap();

    assert_eq!(
        out,
        hex!(
            "ed6a1a20b6fafa4a22a9c847d69710492dd0ae7e80cc7fdcc77e347ba8922374"
            "69c9b16109d2b3a99cc69d1f7f20563fdc117a92e97802cad421e2f8b3d5704a"
        )
    );
}

// -------------------------------------------------------
// Known answer at the Dragonfly defaults (192 MiB, slow in debug builds)
// -------------------------------------------------------

#[test]
#[ignore]
fn dragonfly_default_cost_known_answer() {
    let mut password = *b"password";
    let out = Catena::dragonfly()
        .hash_password(&mut password, b"salt", None, &CatenaParams::dragonfly_default())
        .unwrap();

    assert_eq!(
        out,
        hex!(
            "3c78c3a2ca5a30342eb9d09f29b9f95a19065e44d7ac6329adef2b302436999c"
            "04a08556eb5d28874ffbb1c8b6124e5f4f258fbd6cfa6274e456448100e4ab66"
        )
    );
}
