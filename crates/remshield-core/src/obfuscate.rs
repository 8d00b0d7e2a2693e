//! Reversible string obfuscation (compress, cipher, base64).
//!
//! `encrypt`/`decrypt` are deterministic functions of `(value, key, secret)`:
//! all cipher parameters are re-derived per call from the two input strings,
//! nothing is persisted, and the functions are pure and reentrant.
//!
//! The cipher itself is optional. With the `cipher` feature (default) the
//! active mode is AES-256-CBC; without it the crate degrades to
//! [`CipherMode::Passthrough`], which only compresses and base64-encodes.
//! Passthrough is an encoding, **not** encryption — callers can inspect
//! [`active_mode`] to detect and log degraded operation. The two modes are
//! not interchangeable: data sealed in one mode must be opened in the same
//! mode.
//!
//! Key material: `derived_key = hex(SHA256(key))`, of which AES-256 consumes
//! the first 32 bytes; `iv` = first 16 bytes of `hex(SHA256(secret))`. Empty
//! key/secret strings are hashed as-is — supplying platform default secret
//! material is the caller's job, never this module's.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
#[cfg(feature = "cipher")]
use sha2::{Digest, Sha256};

use crate::error::{RemShieldError, Result};

#[cfg(feature = "cipher")]
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

#[cfg(feature = "cipher")]
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
#[cfg(feature = "cipher")]
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// How a value is sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// AES-256-CBC over the compressed value (requires the `cipher` feature).
    Aes256Cbc,
    /// Compress + base64 only. Degraded compatibility mode, not encryption.
    Passthrough,
}

impl CipherMode {
    /// Short name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CipherMode::Aes256Cbc => "aes-256-cbc",
            CipherMode::Passthrough => "passthrough",
        }
    }
}

/// The mode compiled into this build.
pub fn active_mode() -> CipherMode {
    if cfg!(feature = "cipher") {
        CipherMode::Aes256Cbc
    } else {
        CipherMode::Passthrough
    }
}

/// Seal `value` with the active mode. Returns a base64 string.
pub fn encrypt(value: &str, key: &str, secret: &str) -> Result<String> {
    let mode = active_mode();
    if mode == CipherMode::Passthrough {
        tracing::warn!("cipher support not compiled in; sealing in passthrough mode");
    }
    encrypt_with(mode, value, key, secret)
}

/// Open a base64 string sealed by [`encrypt`] with the same key/secret.
pub fn decrypt(value: &str, key: &str, secret: &str) -> Result<String> {
    decrypt_with(active_mode(), value, key, secret)
}

/// Seal `value` with an explicit mode.
pub fn encrypt_with(mode: CipherMode, value: &str, key: &str, secret: &str) -> Result<String> {
    let compressed = compress(value)?;

    match mode {
        CipherMode::Passthrough => Ok(BASE64.encode(compressed)),
        CipherMode::Aes256Cbc => {
            let ciphertext = cbc_encrypt(&compressed, key, secret)?;
            Ok(BASE64.encode(ciphertext))
        }
    }
}

/// Open `value` with an explicit mode.
///
/// A wrong key/secret (or corrupted input) surfaces as
/// [`RemShieldError::Crypto`]; it never silently yields garbage or an empty
/// string.
pub fn decrypt_with(mode: CipherMode, value: &str, key: &str, secret: &str) -> Result<String> {
    let raw = BASE64
        .decode(value)
        .map_err(|e| RemShieldError::Crypto(format!("invalid base64: {e}")))?;

    let compressed = match mode {
        CipherMode::Passthrough => raw,
        CipherMode::Aes256Cbc => cbc_decrypt(&raw, key, secret)?,
    };

    decompress(&compressed)
}

fn compress(value: &str) -> Result<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(value.as_bytes())
        .map_err(|e| RemShieldError::Internal(format!("compress failed: {e}")))?;
    enc.finish()
        .map_err(|e| RemShieldError::Internal(format!("compress failed: {e}")))
}

fn decompress(raw: &[u8]) -> Result<String> {
    let mut out = String::new();
    ZlibDecoder::new(raw)
        .read_to_string(&mut out)
        .map_err(|e| RemShieldError::Crypto(format!("decompress failed: {e}")))?;
    Ok(out)
}

/// AES-256 key bytes: first 32 bytes of `hex(SHA256(key))`.
#[cfg(feature = "cipher")]
fn derive_key(key: &str) -> [u8; 32] {
    let hexed = hex::encode(Sha256::digest(key.as_bytes()));
    let mut out = [0u8; 32];
    out.copy_from_slice(&hexed.as_bytes()[..32]);
    out
}

/// IV bytes: first 16 bytes of `hex(SHA256(secret))`.
#[cfg(feature = "cipher")]
fn derive_iv(secret: &str) -> [u8; 16] {
    let hexed = hex::encode(Sha256::digest(secret.as_bytes()));
    let mut out = [0u8; 16];
    out.copy_from_slice(&hexed.as_bytes()[..16]);
    out
}

#[cfg(feature = "cipher")]
fn cbc_encrypt(data: &[u8], key: &str, secret: &str) -> Result<Vec<u8>> {
    let enc = Aes256CbcEnc::new_from_slices(&derive_key(key), &derive_iv(secret))
        .map_err(|e| RemShieldError::Internal(format!("cipher init failed: {e}")))?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(data))
}

#[cfg(feature = "cipher")]
fn cbc_decrypt(data: &[u8], key: &str, secret: &str) -> Result<Vec<u8>> {
    let dec = Aes256CbcDec::new_from_slices(&derive_key(key), &derive_iv(secret))
        .map_err(|e| RemShieldError::Internal(format!("cipher init failed: {e}")))?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| RemShieldError::Crypto("decrypt failed: bad key, iv, or ciphertext".into()))
}

#[cfg(not(feature = "cipher"))]
fn cbc_encrypt(_data: &[u8], _key: &str, _secret: &str) -> Result<Vec<u8>> {
    Err(RemShieldError::Crypto(
        "cipher support not compiled in".into(),
    ))
}

#[cfg(not(feature = "cipher"))]
fn cbc_decrypt(_data: &[u8], _key: &str, _secret: &str) -> Result<Vec<u8>> {
    Err(RemShieldError::Crypto(
        "cipher support not compiled in".into(),
    ))
}
