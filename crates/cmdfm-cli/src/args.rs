//! Splitting of the process argument vector into invocations.

/// Separator between invocations: `cmdfm copy a b --then undo`.
pub const THEN: &str = "--then";

/// Splits `args` on [`THEN`], dropping empty invocations.
pub fn split_invocations(args: &[String]) -> Vec<Vec<String>> {
    args.split(|arg| arg == THEN)
        .filter(|group| !group.is_empty())
        .map(<[String]>::to_vec)
        .collect()
}
