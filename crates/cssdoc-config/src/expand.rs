//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left alone. An unset variable without a default is an error
/// naming `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("CSSDOC_TEST_TITLE", "Acme UI");
        }
        let result = expand_env("${CSSDOC_TEST_TITLE} styleguide", "site.title").unwrap();
        assert_eq!(result, "Acme UI styleguide");
        unsafe {
            std::env::remove_var("CSSDOC_TEST_TITLE");
        }
    }

    #[test]
    fn test_expand_default() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("CSSDOC_TEST_UNSET_BASE");
        }
        let result = expand_env("${CSSDOC_TEST_UNSET_BASE:-/docs}", "site.base").unwrap();
        assert_eq!(result, "/docs");
    }

    #[test]
    fn test_expand_missing_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("CSSDOC_TEST_MISSING");
        }
        let err = expand_env("${CSSDOC_TEST_MISSING}", "output.output_dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("CSSDOC_TEST_MISSING"));
        assert!(message.contains("output.output_dir"));
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("$HOME/x", "site.base").unwrap(), "$HOME/x");
        assert_eq!(expand_env("plain", "site.title").unwrap(), "plain");
    }
}
