//! Environment-derived CLI configuration.

use std::path::PathBuf;

/// CLI settings sourced from the environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default lexicon path used when `--lexicon` is not given.
    pub lexicon_path: Option<PathBuf>,
}

/// Read CLI configuration from process env vars.
pub fn load_cli_config() -> CliConfig {
    build_cli_config(|key| std::env::var(key))
}

/// Build CLI configuration from the provided env-var lookup function.
///
/// Decoupled from the actual environment so tests can use a pure `HashMap`
/// lookup instead of mutating process env.
fn build_cli_config<F>(lookup: F) -> CliConfig
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CliConfig {
        lexicon_path: lookup("SENTILEX_LEXICON_PATH").ok().map(PathBuf::from),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn lexicon_path_defaults_to_none() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_cli_config(lookup_from_map(&map));
        assert!(cfg.lexicon_path.is_none());
    }

    #[test]
    fn lexicon_path_read_from_env() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SENTILEX_LEXICON_PATH", "/tmp/lexicon.json");
        let cfg = build_cli_config(lookup_from_map(&map));
        assert_eq!(cfg.lexicon_path, Some(PathBuf::from("/tmp/lexicon.json")));
    }
}
