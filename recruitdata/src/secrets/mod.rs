//! Credential sealing for `.env` files.
//!
//! The login flows read `username` and `password` from a `.env` file. This
//! module encrypts the values of such a file in place so it can be committed,
//! and decrypts them again before a run. Values are sealed with AES-256-GCM
//! under a key derived from the configured key material (SHA-256), and
//! stored as base64 of `nonce || ciphertext`.

use std::fs;
use std::path::{Path, PathBuf};

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::config::CryptoConfig;
use crate::error::{SecretError, SecretResult};

const NONCE_LEN: usize = 12;

/// Symmetric cipher for credential values.
pub struct CredentialCipher {
    cipher: Aes256Gcm,
}

impl CredentialCipher {
    pub fn new(config: &CryptoConfig) -> SecretResult<Self> {
        let key = Sha256::digest(config.key().as_bytes());
        let cipher = Aes256Gcm::new_from_slice(&key).map_err(|e| SecretError::Cipher(e.to_string()))?;
        Ok(Self { cipher })
    }

    /// Encrypt `plain` with a fresh random nonce.
    pub fn encrypt(&self, plain: &str) -> SecretResult<String> {
        let mut nonce = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce);

        let sealed = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plain.as_bytes())
            .map_err(|e| SecretError::Cipher(e.to_string()))?;

        let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(STANDARD.encode(out))
    }

    /// Decrypt a value produced by [`Self::encrypt`].
    pub fn decrypt(&self, sealed: &str) -> SecretResult<String> {
        let bytes = STANDARD.decode(sealed.trim())?;
        if bytes.len() <= NONCE_LEN {
            return Err(SecretError::Truncated(bytes.len()));
        }
        let (nonce, cipher_text) = bytes.split_at(NONCE_LEN);

        let plain = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), cipher_text)
            .map_err(|_| SecretError::Decrypt)?;
        Ok(String::from_utf8(plain)?)
    }
}

/// Location of the env file for an optional environment name:
/// `<dir>/.env` or `<dir>/.env.<environment>`.
pub fn env_file_path(config_dir: impl AsRef<Path>, environment: Option<&str>) -> PathBuf {
    match environment {
        Some(env) if !env.is_empty() => config_dir.as_ref().join(format!(".env.{}", env)),
        _ => config_dir.as_ref().join(".env"),
    }
}

/// Encrypt every value of env-file content.
pub fn encrypt_env(content: &str, cipher: &CredentialCipher) -> SecretResult<String> {
    map_env_values(content, |value| cipher.encrypt(value))
}

/// Decrypt every value of env-file content.
pub fn decrypt_env(content: &str, cipher: &CredentialCipher) -> SecretResult<String> {
    map_env_values(content, |value| cipher.decrypt(value))
}

/// Encrypt the env file at `path` in place. Returns the number of values sealed.
pub fn encrypt_env_file(path: &Path, cipher: &CredentialCipher) -> SecretResult<usize> {
    rewrite_env_file(path, |content| encrypt_env(content, cipher))
}

/// Decrypt the env file at `path` in place. Returns the number of values opened.
pub fn decrypt_env_file(path: &Path, cipher: &CredentialCipher) -> SecretResult<usize> {
    rewrite_env_file(path, |content| decrypt_env(content, cipher))
}

fn rewrite_env_file<F>(path: &Path, transform: F) -> SecretResult<usize>
where
    F: FnOnce(&str) -> SecretResult<String>,
{
    let io_err = |source: std::io::Error| SecretError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(io_err)?;
    let updated = transform(&content)?;
    let count = content.lines().filter(|l| env_value(l).is_some()).count();
    fs::write(path, updated).map_err(io_err)?;
    Ok(count)
}

/// `KEY=value` split at the first `=`; `None` for blank lines, comments and
/// keys without a value.
fn env_value(line: &str) -> Option<(&str, &str)> {
    if line.trim_start().starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    if value.trim().is_empty() {
        return None;
    }
    Some((key, value))
}

fn map_env_values<F>(content: &str, mut f: F) -> SecretResult<String>
where
    F: FnMut(&str) -> SecretResult<String>,
{
    let lines = content
        .split('\n')
        .map(|line| {
            let (body, cr) = match line.strip_suffix('\r') {
                Some(body) => (body, "\r"),
                None => (line, ""),
            };
            match env_value(body) {
                Some((key, value)) => Ok(format!("{}={}{}", key, f(value)?, cr)),
                None => Ok(line.to_string()),
            }
        })
        .collect::<SecretResult<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cipher(key: &str) -> CredentialCipher {
        CredentialCipher::new(&CryptoConfig::new(key)).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt() {
        let c = cipher("salt");
        let sealed = c.encrypt("admin123").unwrap();

        assert_ne!(sealed, "admin123");
        assert_eq!(c.decrypt(&sealed).unwrap(), "admin123");
    }

    #[test]
    fn test_fresh_nonce_per_value() {
        let c = cipher("salt");
        assert_ne!(c.encrypt("Admin").unwrap(), c.encrypt("Admin").unwrap());
    }

    #[test]
    fn test_wrong_key_fails() {
        let sealed = cipher("right").encrypt("admin123").unwrap();
        assert!(matches!(cipher("wrong").decrypt(&sealed), Err(SecretError::Decrypt)));
    }

    #[test]
    fn test_garbage_input() {
        let c = cipher("salt");
        assert!(matches!(c.decrypt("not base64!"), Err(SecretError::Encoding(_))));
        assert!(matches!(c.decrypt("AAAA"), Err(SecretError::Truncated(3))));
    }

    #[test]
    fn test_env_content_keeps_layout() {
        let c = cipher("salt");
        let content = "# credentials\nusername=Admin\n\npassword=admin123\nEMPTY=\n";

        let sealed = encrypt_env(content, &c).unwrap();
        let lines: Vec<&str> = sealed.split('\n').collect();
        assert_eq!(lines[0], "# credentials");
        assert!(lines[1].starts_with("username="));
        assert_ne!(lines[1], "username=Admin");
        assert_eq!(lines[2], "");
        assert_eq!(lines[4], "EMPTY=");

        assert_eq!(decrypt_env(&sealed, &c).unwrap(), content);
    }

    #[test]
    fn test_padded_value_kept_verbatim() {
        let c = cipher("salt");
        let content = "password= pa ss \n";

        let sealed = encrypt_env(content, &c).unwrap();
        assert_eq!(decrypt_env(&sealed, &c).unwrap(), content);
    }

    #[test]
    fn test_env_file_in_place() {
        let dir = tempdir().unwrap();
        let path = env_file_path(dir.path(), None);
        fs::write(&path, "username=Admin\npassword=admin123").unwrap();
        let c = cipher("salt");

        assert_eq!(encrypt_env_file(&path, &c).unwrap(), 2);
        let sealed = fs::read_to_string(&path).unwrap();
        assert!(!sealed.contains("admin123"));

        assert_eq!(decrypt_env_file(&path, &c).unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "username=Admin\npassword=admin123");
    }

    #[test]
    fn test_env_file_path() {
        assert_eq!(env_file_path("config", None), PathBuf::from("config/.env"));
        assert_eq!(env_file_path("config", Some("qa")), PathBuf::from("config/.env.qa"));
        assert_eq!(env_file_path("config", Some("")), PathBuf::from("config/.env"));
    }

    #[test]
    fn test_missing_env_file() {
        let dir = tempdir().unwrap();
        let err = encrypt_env_file(&dir.path().join(".env"), &cipher("salt")).unwrap_err();
        assert!(matches!(err, SecretError::Io { .. }));
    }
}
