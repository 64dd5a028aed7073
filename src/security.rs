use sha2::digest::{CtOutput, Output};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hash scheme identifier stored with every hash, so the scheme can be
/// rotated later without invalidating existing records.
const SCHEME: &str = "sha256-iter";

/// Number of stretching rounds applied to the salted digest
const ITERATIONS: u32 = 10_000;

/// Hash a password for storage
///
/// The plaintext is never stored. The stored form is
/// `sha256-iter$<iterations>$<salt>$<hex digest>` where the digest is an
/// iterated SHA-256 over the salt and password:
///
/// `d_0 = SHA256(salt || password)`, `d_n = SHA256(d_{n-1} || password)`
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let digest = hex::encode(derive(password, &salt, ITERATIONS));
    format!("{}${}${}${}", SCHEME, ITERATIONS, salt, digest)
}

/// Verify a password attempt against a stored hash
///
/// Returns false for malformed stored hashes rather than erroring; an
/// unreadable hash is indistinguishable from a wrong password to the caller.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (scheme, iterations, salt, digest) = match (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) {
        (Some(scheme), Some(iters), Some(salt), Some(digest), None) => {
            match iters.parse::<u32>() {
                Ok(n) => (scheme, n, salt, digest),
                Err(_) => return false,
            }
        }
        _ => {
            tracing::warn!("Malformed password hash in store");
            return false;
        }
    };

    if scheme != SCHEME {
        tracing::warn!("Unknown password hash scheme: {}", scheme);
        return false;
    }

    let expected = match hex::decode(digest) {
        Ok(bytes) if bytes.len() == Sha256::output_size() => {
            Output::<Sha256>::clone_from_slice(&bytes)
        }
        _ => {
            tracing::warn!("Malformed password digest in store");
            return false;
        }
    };

    // Constant-time comparison; a plain == would leak how many leading
    // bytes of the digest match.
    CtOutput::<Sha256>::new(derive(password, salt, iterations)) == CtOutput::new(expected)
}

fn derive(password: &str, salt: &str, iterations: u32) -> Output<Sha256> {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let mut digest = hasher.finalize();

    for _ in 1..iterations {
        let mut hasher = Sha256::new();
        hasher.update(digest);
        hasher.update(password.as_bytes());
        digest = hasher.finalize();
    }

    digest
}

/// Generate an unguessable session token
pub fn new_session_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_format() {
        let stored = hash_password("pw123");
        let parts: Vec<&str> = stored.split('$').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], SCHEME);
        assert_eq!(parts[1], ITERATIONS.to_string());
        assert_eq!(parts[3].len(), 64);
        assert!(parts[3].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_password_accepts_correct() {
        let stored = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &stored));
    }

    #[test]
    fn test_verify_password_rejects_wrong() {
        let stored = hash_password("pw123");
        assert!(!verify_password("pw124", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn test_hashes_are_salted() {
        // Same password twice must not produce the same stored hash
        let a = hash_password("pw123");
        let b = hash_password("pw123");
        assert_ne!(a, b);
        assert!(verify_password("pw123", &a));
        assert!(verify_password("pw123", &b));
    }

    #[test]
    fn test_verify_password_malformed_hash() {
        assert!(!verify_password("pw", "not-a-hash"));
        assert!(!verify_password("pw", "sha256-iter$abc$salt$digest"));
        assert!(!verify_password("pw", "md5$1$salt$digest"));
    }

    #[test]
    fn test_verify_password_malformed_digest_field() {
        // Non-hex digest
        assert!(!verify_password("pw", "sha256-iter$10000$salt$zz11"));
        // Valid hex but wrong length for SHA-256
        assert!(!verify_password("pw", "sha256-iter$10000$salt$deadbeef"));
        // Truncated copy of a real digest
        let stored = hash_password("pw");
        let truncated = &stored[..stored.len() - 2];
        assert!(!verify_password("pw", truncated));
    }

    #[test]
    fn test_session_tokens_unique() {
        assert_ne!(new_session_token(), new_session_token());
    }
}
