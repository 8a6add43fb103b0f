//! JOSE algorithm names (RFC 7518)

authlete_enum! {
    /// JWS `alg` values
    pub enum JwsAlg {
        /// Unsecured
        None => "NONE",
        Hs256 => "HS256",
        Hs384 => "HS384",
        Hs512 => "HS512",
        Rs256 => "RS256",
        Rs384 => "RS384",
        Rs512 => "RS512",
        Es256 => "ES256",
        Es384 => "ES384",
        Es512 => "ES512",
        Ps256 => "PS256",
        Ps384 => "PS384",
        Ps512 => "PS512",
        Es256K => "ES256K",
        EdDsa => "EdDSA",
    }
}

authlete_enum! {
    /// JWE `alg` values
    pub enum JweAlg {
        Rsa15 => "RSA1_5",
        RsaOaep => "RSA_OAEP",
        RsaOaep256 => "RSA_OAEP_256",
        A128Kw => "A128KW",
        A192Kw => "A192KW",
        A256Kw => "A256KW",
        Dir => "DIR",
        EcdhEs => "ECDH_ES",
        EcdhEsA128Kw => "ECDH_ES_A128KW",
        EcdhEsA192Kw => "ECDH_ES_A192KW",
        EcdhEsA256Kw => "ECDH_ES_A256KW",
        A128GcmKw => "A128GCMKW",
        A192GcmKw => "A192GCMKW",
        A256GcmKw => "A256GCMKW",
        Pbes2Hs256A128Kw => "PBES2_HS256_A128KW",
        Pbes2Hs384A192Kw => "PBES2_HS384_A192KW",
        Pbes2Hs512A256Kw => "PBES2_HS512_A256KW",
    }
}

authlete_enum! {
    /// JWE `enc` values
    pub enum JweEnc {
        A128CbcHs256 => "A128CBC_HS256",
        A192CbcHs384 => "A192CBC_HS384",
        A256CbcHs512 => "A256CBC_HS512",
        A128Gcm => "A128GCM",
        A192Gcm => "A192GCM",
        A256Gcm => "A256GCM",
    }
}
