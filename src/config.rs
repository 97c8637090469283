//! Serializable cipher configuration.
//!
//! A configuration names an alphabet (a built-in preset or an explicit
//! symbol string) and optionally a key. Without a key the cipher picks its
//! default key; with one the key is validated.
//!
//! ```
//! use affinecrypt::config::CipherConfig;
//!
//! let config: CipherConfig = serde_json::from_str(r#"{ "alphabet": "uppercase", "key": 7 }"#).unwrap();
//! let cipher = config.build().unwrap();
//! assert_eq!(cipher.modulus(), 26);
//! assert_eq!(cipher.key(), 7);
//! ```

use serde::{Deserialize, Serialize};

use crate::affine::AffineCipher;
use crate::alphabet::{Alphabet, AlphabetPreset};
use crate::error::Result;

/// Where the alphabet of a configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlphabetSource {
    /// A preset name such as `"lowercase"`.
    Preset(String),
    /// An explicit list of symbols, in positional order.
    Symbols { symbols: String },
}

impl AlphabetSource {
    /// Builds the alphabet this source describes.
    ///
    /// # Errors
    /// - [`AffineCryptError::UnknownPreset`](crate::error::AffineCryptError::UnknownPreset)
    ///   for an unrecognized preset name.
    /// - Any alphabet validation error for explicit symbols.
    pub fn resolve(&self) -> Result<Alphabet> {
        match self {
            AlphabetSource::Preset(name) => Ok(Alphabet::preset(name.parse()?)),
            AlphabetSource::Symbols { symbols } => Alphabet::new(symbols),
        }
    }
}

impl Default for AlphabetSource {
    fn default() -> Self {
        AlphabetPreset::Lowercase.into()
    }
}

impl From<AlphabetPreset> for AlphabetSource {
    fn from(preset: AlphabetPreset) -> Self {
        AlphabetSource::Preset(preset.name().to_string())
    }
}

/// Cipher settings: an alphabet and an optional key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    /// Alphabet to build the cipher over. Defaults to lowercase letters.
    #[serde(default)]
    pub alphabet: AlphabetSource,
    /// Explicit key. `None` selects the default key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<i64>,
}

impl CipherConfig {
    /// Configuration over `alphabet` with the default key.
    pub fn new(alphabet: impl Into<AlphabetSource>) -> Self {
        CipherConfig {
            alphabet: alphabet.into(),
            key: None,
        }
    }

    /// Sets an explicit key.
    pub fn with_key(mut self, key: i64) -> Self {
        self.key = Some(key);
        self
    }

    /// Builds the cipher.
    ///
    /// # Errors
    /// Alphabet resolution errors, plus
    /// [`AffineCryptError::InsecureKey`](crate::error::AffineCryptError::InsecureKey)
    /// when an explicit key is rejected.
    pub fn build(&self) -> Result<AffineCipher> {
        let alphabet = self.alphabet.resolve()?;
        match self.key {
            Some(key) => AffineCipher::new_with_key(alphabet, key),
            None => AffineCipher::new_default(alphabet),
        }
    }
}
