// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT session tests.
//!
//! These verify that tokens from `create_jwt` carry the claims the session
//! middleware expects.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use login_gate::middleware::auth::{create_jwt, Claims};

#[test]
fn test_jwt_roundtrip() {
    let signing_key = b"test_signing_key_32_bytes_long!!";

    let token = create_jwt("user123", signing_key).expect("Failed to create JWT");

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(token_data.claims.sub, "user123");
    assert!(token_data.claims.exp > token_data.claims.iat);
    assert_eq!(token_data.claims.exp - token_data.claims.iat, 30 * 24 * 60 * 60);
}

#[test]
fn test_jwt_wrong_key_rejected() {
    let token = create_jwt("user123", b"test_signing_key_32_bytes_long!!").unwrap();

    let key = DecodingKey::from_secret(b"wrong_signing_key_32_bytes_long!");
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&token, &key, &validation).is_err());
}
