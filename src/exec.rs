use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LaunchError;

/// Field codes a desktop entry may embed in its Exec line (`%f`, `%u`, ...).
static FIELD_CODES: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[uUfFdDnNickvm]").unwrap());

/// Strip field codes from a raw `Exec=` line and trim trailing whitespace.
///
/// Nothing substitutes files or URLs at launch time, so the placeholders are
/// deleted outright rather than expanded. An exec line that is empty once
/// the codes are gone has nothing left to run and aborts the launch.
pub fn sanitize_exec(raw: &str) -> Result<String, LaunchError> {
    let cleaned = FIELD_CODES.replace_all(raw, "");
    let cleaned = cleaned.trim_end();
    if cleaned.trim().is_empty() {
        return Err(LaunchError::NoExecutableCommand);
    }
    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_field_code() {
        let raw = "app %f %F %u %U %d %D %n %N %i %c %k %v %m";
        let sanitized = sanitize_exec(raw).unwrap();
        for code in [
            "%f", "%F", "%u", "%U", "%d", "%D", "%n", "%N", "%i", "%c", "%k", "%v", "%m",
        ] {
            assert!(!sanitized.contains(code), "{code} survived in {sanitized:?}");
        }
        assert_eq!(sanitized, sanitized.trim_end());
    }

    #[test]
    fn leaves_unknown_percent_sequences_alone() {
        assert_eq!(sanitize_exec("app %% %x").unwrap(), "app %% %x");
    }

    #[test]
    fn trims_trailing_whitespace_only() {
        assert_eq!(sanitize_exec("vim %F").unwrap(), "vim");
        assert_eq!(sanitize_exec("  ls  ").unwrap(), "  ls");
    }

    #[test]
    fn is_idempotent() {
        let once = sanitize_exec("firefox %u https://example.com").unwrap();
        let twice = sanitize_exec(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(sanitize_exec(""), Err(LaunchError::NoExecutableCommand)));
        assert!(matches!(sanitize_exec("   "), Err(LaunchError::NoExecutableCommand)));
    }

    #[test]
    fn rejects_field_codes_only() {
        assert!(matches!(sanitize_exec("%u %F"), Err(LaunchError::NoExecutableCommand)));
    }
}
