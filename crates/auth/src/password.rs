//! Passwort-Hashing mit Argon2id
//!
//! Stellt sichere Passwort-Hashfunktionen mit Argon2id bereit.
//! Argon2id ist der empfohlene Algorithmus gemaess OWASP-Richtlinien.
//!
//! Der [`PasswortHasher`] ist ein gewoehnlicher Wert: er wird einmal aus der
//! Konfiguration gebaut und an die Komponenten weitergereicht, die ihn brauchen.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AuthError, AuthResult};

/// Argon2id-Parameter fuer sicheres Passwort-Hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Parameter {
    /// Speicherbedarf in KiB (m_cost)
    pub speicher_kib: u32,
    /// Anzahl Iterationen (t_cost)
    pub iterationen: u32,
    /// Parallelismus (p_cost)
    pub parallelitaet: u32,
}

/// Werte gemaess OWASP-Empfehlungen (Stand 2024):
/// - Speicher: 64 MiB
/// - Iterationen: 3
/// - Parallelismus: 1
impl Default for Argon2Parameter {
    fn default() -> Self {
        Self {
            speicher_kib: 64 * 1024,
            iterationen: 3,
            parallelitaet: 1,
        }
    }
}

/// Hasht und verifiziert Passwoerter mit festen Argon2id-Parametern
#[derive(Clone)]
pub struct PasswortHasher {
    params: Params,
    /// Wird bei unbekannten Benutzernamen geprueft, damit die Antwortzeit gleich bleibt
    attrappen_hash: String,
}

impl std::fmt::Debug for PasswortHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswortHasher")
            .field("m_cost", &self.params.m_cost())
            .field("t_cost", &self.params.t_cost())
            .field("p_cost", &self.params.p_cost())
            .finish()
    }
}

impl PasswortHasher {
    /// Erstellt einen Hasher und berechnet dabei den Attrappen-Hash
    pub fn neu(parameter: Argon2Parameter) -> AuthResult<Self> {
        let params = Params::new(
            parameter.speicher_kib,
            parameter.iterationen,
            parameter.parallelitaet,
            None, // output_len: Standard (32 Bytes)
        )
        .map_err(|e| AuthError::PasswortHashing(format!("Ungueltige Argon2-Parameter: {e}")))?;

        let mut hasher = Self {
            params,
            attrappen_hash: String::new(),
        };
        hasher.attrappen_hash = hasher.hashen("questgate-attrappe")?;
        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hasht ein Passwort mit Argon2id und einem zufaelligen Salt
    ///
    /// Gibt den PHC-String zurueck (inkl. Algorithmus, Parameter und Salt).
    pub fn hashen(&self, passwort: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(passwort.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswortHashing(e.to_string()))
    }

    /// Verifiziert ein Passwort gegen einen gespeicherten PHC-Hash
    ///
    /// Der Vergleich im argon2-Crate laeuft in konstanter Zeit.
    pub fn verifizieren(&self, passwort: &str, hash: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthError::PasswortHashing(format!("Ungueltiges Hash-Format: {e}")))?;

        match self.argon2().verify_password(passwort.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswortHashing(e.to_string())),
        }
    }

    /// Verbraucht dieselbe Rechenzeit wie eine echte Verifikation
    pub fn attrappe_verifizieren(&self, passwort: &str) {
        let _ = self.verifizieren(passwort, &self.attrappen_hash);
    }
}
