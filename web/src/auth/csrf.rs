//! Anti-forgery tokens
//!
//! Double-submit scheme: a random nonce lives in an `HttpOnly` cookie and the
//! form carries HMAC-SHA256(secret, nonce). A cross-site page can make the
//! browser send the cookie but cannot read it, so it cannot produce the
//! matching form token.

use axum::http::{header, HeaderMap};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Cookie holding the nonce
pub const CSRF_COOKIE: &str = "askbox_csrf";

/// Hidden form field holding the signed token
pub const CSRF_FIELD: &str = "csrf_token";

const NONCE_BYTES: usize = 32;

/// Nonce and the form token derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub nonce: String,
    pub form_token: String,
}

/// Issues and checks anti-forgery tokens
#[derive(Clone)]
pub struct CsrfGuard {
    mac: HmacSha256,
    secure_cookie: bool,
}

impl CsrfGuard {
    /// `secure_cookie` adds the `Secure` attribute (HTTPS deployments)
    pub fn new(secret: &str, secure_cookie: bool) -> anyhow::Result<Self> {
        let mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
            Ok(m) => m,
            Err(e) => anyhow::bail!("Invalid anti-forgery secret: {}", e),
        };

        Ok(Self { mac, secure_cookie })
    }

    /// Token for rendering a form
    ///
    /// Reuses the nonce from the request cookie when it is well formed so that
    /// a re-rendered form stays valid; otherwise mints a new one.
    pub fn token_for(&self, headers: &HeaderMap) -> CsrfToken {
        let nonce = cookie_value(headers, CSRF_COOKIE)
            .filter(|n| is_well_formed_nonce(n))
            .map(str::to_string)
            .unwrap_or_else(generate_nonce);

        CsrfToken {
            form_token: self.sign(&nonce),
            nonce,
        }
    }

    /// `Set-Cookie` value carrying the token's nonce
    pub fn cookie(&self, token: &CsrfToken) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Strict",
            CSRF_COOKIE, token.nonce
        );
        if self.secure_cookie {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Check a posted form token against the request cookie
    pub fn verify(&self, headers: &HeaderMap, form_token: &str) -> bool {
        let Some(nonce) = cookie_value(headers, CSRF_COOKIE) else {
            tracing::debug!("Anti-forgery cookie missing");
            return false;
        };

        let Ok(expected) = hex::decode(form_token) else {
            return false;
        };

        let mut mac = self.mac.clone();
        mac.update(nonce.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }

    fn sign(&self, nonce: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(nonce.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Value of the named cookie from the `Cookie` request headers
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn is_well_formed_nonce(nonce: &str) -> bool {
    nonce.len() == NONCE_BYTES * 2 && nonce.bytes().all(|b| b.is_ascii_hexdigit())
}

fn generate_nonce() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..NONCE_BYTES).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}
