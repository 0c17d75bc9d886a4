use std::collections::HashMap;

/// Variables removed from the child environment.
///
/// The launcher itself may run with `GDK_BACKEND=x11` forced for its own
/// window placement; children must pick the native backend of the running
/// session instead.
pub const ENV_VARS_TO_STRIP: &[&str] = &["GDK_BACKEND"];

/// Build the child environment from a snapshot of the ambient one.
///
/// The snapshot is passed in rather than read here, so the builder stays a
/// pure function. This is the only environment mutation the pipeline makes.
pub fn build_env<I>(ambient: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env: HashMap<String, String> = ambient.into_iter().collect();
    for var in ENV_VARS_TO_STRIP {
        env.remove(*var);
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn removes_exactly_the_backend_override() {
        let env = build_env(snapshot(&[
            ("PATH", "/usr/bin"),
            ("GDK_BACKEND", "x11"),
            ("HOME", "/home/u"),
        ]));
        assert_eq!(env.get("PATH").map(String::as_str), Some("/usr/bin"));
        assert_eq!(env.get("HOME").map(String::as_str), Some("/home/u"));
        assert!(!env.contains_key("GDK_BACKEND"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn is_identity_when_the_override_is_absent() {
        let env = build_env(snapshot(&[("PATH", "/usr/bin"), ("LANG", "C")]));
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("LANG").map(String::as_str), Some("C"));
    }
}
