//! Run configuration, assembled once at startup and never mutated afterwards.

use getset::{CopyGetters, Getters};

use crate::constants::{MIN_STRING_LEN, MTK_CLIENT_ARGS, MTK_CLIENT_CMD};
use crate::pstore::PstoreConfig;

/// Settings shared by every step of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Config {
    /// Command invoking mtkclient.
    #[get = "pub"]
    client_cmd: String,
    /// Extra arguments appended verbatim to every mtkclient command line.
    #[get = "pub"]
    client_args: String,
    /// Pstore region used when neither an override nor a detected value exists.
    #[get_copy = "pub"]
    pstore_defaults: PstoreConfig,
    /// The minimum length of the strings written to the output file.
    #[get_copy = "pub"]
    min_string_len: usize,
}

impl Config {
    /// Creates a configuration with the built-in pstore defaults and string length.
    pub fn new(client_cmd: impl Into<String>, client_args: impl Into<String>) -> Self {
        Config {
            client_cmd: client_cmd.into(),
            client_args: client_args.into(),
            pstore_defaults: PstoreConfig::default(),
            min_string_len: MIN_STRING_LEN,
        }
    }

    pub fn with_pstore_defaults(self, pstore_defaults: PstoreConfig) -> Self {
        Config {
            pstore_defaults,
            ..self
        }
    }

    pub fn with_min_string_len(self, min_string_len: usize) -> Self {
        Config {
            min_string_len,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(MTK_CLIENT_CMD, MTK_CLIENT_ARGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PSTORE_ADDRESS, PSTORE_SIZE};
    use crate::pstore::HexValue;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.client_cmd(), "python mtkclient/mtk.py");
        assert_eq!(config.client_args(), "");
        assert_eq!(config.min_string_len(), 4);
        assert_eq!(config.pstore_defaults().address(), HexValue(PSTORE_ADDRESS));
        assert_eq!(config.pstore_defaults().size(), HexValue(PSTORE_SIZE));
    }

    #[test]
    fn test_overrides() {
        let region = PstoreConfig::new(HexValue(0x1000), HexValue(0x200));
        let config = Config::new("mtk", "--debugmode")
            .with_pstore_defaults(region)
            .with_min_string_len(8);

        assert_eq!(config.client_cmd(), "mtk");
        assert_eq!(config.client_args(), "--debugmode");
        assert_eq!(config.pstore_defaults(), region);
        assert_eq!(config.min_string_len(), 8);
    }
}
