//! Environment handed to git so it never opens an interactive editor.

use std::collections::HashMap;
use std::ffi::OsString;

use log::info;

/// A command that exits successfully without output or interaction.
pub const NOOP_EDITOR: &str = "true";

/// Variables git consults when it wants an editor. Both are overridden.
pub const EDITOR_OVERRIDE_KEYS: [&str; 2] = ["GIT_EDITOR", "EDITOR"];

/// A complete child-process environment.
pub type Environment = HashMap<OsString, OsString>;

/// Copies `inherited` and points every editor variable at [`NOOP_EDITOR`].
///
/// All other variables are kept exactly as given.
pub fn editor_override<I, K, V>(inherited: I) -> Environment
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    let mut environment: Environment = inherited
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();

    for key in EDITOR_OVERRIDE_KEYS {
        environment.insert(OsString::from(key), OsString::from(NOOP_EDITOR));
    }

    info!(
        "Overriding {} with `{}` for the rebase abort",
        EDITOR_OVERRIDE_KEYS.join(", "),
        NOOP_EDITOR
    );

    environment
}

/// [`editor_override`] applied to this process's own environment.
pub fn editor_override_from_process() -> Environment {
    editor_override(std::env::vars_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_override_sets_both_keys() {
        let environment = editor_override(Vec::<(String, String)>::new());

        assert_eq!(environment.len(), 2);
        assert_eq!(environment.get(&OsString::from("GIT_EDITOR")), Some(&OsString::from("true")));
        assert_eq!(environment.get(&OsString::from("EDITOR")), Some(&OsString::from("true")));
    }

    #[test]
    fn test_editor_override_replaces_existing_editors() {
        let inherited = vec![
            ("EDITOR".to_string(), "vim".to_string()),
            ("GIT_EDITOR".to_string(), "nano".to_string()),
        ];
        let environment = editor_override(inherited);

        assert_eq!(environment.get(&OsString::from("EDITOR")), Some(&OsString::from("true")));
        assert_eq!(environment.get(&OsString::from("GIT_EDITOR")), Some(&OsString::from("true")));
    }

    #[test]
    fn test_editor_override_keeps_everything_else() {
        let inherited = vec![
            ("PATH".to_string(), "/usr/bin:/bin".to_string()),
            ("HOME".to_string(), "/home/someone".to_string()),
            ("EDITOR".to_string(), "emacs".to_string()),
        ];
        let environment = editor_override(inherited.clone());

        let mut expected: Environment = inherited
            .into_iter()
            .map(|(key, value)| (OsString::from(key), OsString::from(value)))
            .collect();
        expected.insert(OsString::from("EDITOR"), OsString::from("true"));
        expected.insert(OsString::from("GIT_EDITOR"), OsString::from("true"));

        assert_eq!(environment, expected);
    }

    #[test]
    fn test_editor_override_from_process_copies_process_environment() {
        let environment = editor_override_from_process();

        for (key, value) in std::env::vars_os() {
            if EDITOR_OVERRIDE_KEYS.iter().any(|k| OsString::from(*k) == key) {
                continue;
            }
            assert_eq!(environment.get(&key), Some(&value));
        }
        assert_eq!(environment.get(&OsString::from("EDITOR")), Some(&OsString::from("true")));
    }
}
