use std::ffi::OsString;

/// Rewrite single-dash long options (e.g. `-input`) to the double-dash form
/// clap understands. `legacy` pairs each old spelling with its long name.
/// Both `-opt value` and `-opt=value` are handled; everything after a bare
/// `--` is passed through untouched.
pub fn normalize_args<I, T>(args: I, legacy: &[(&str, &str)]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut end_of_opts = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(ix, arg)| {
            if ix == 0 || end_of_opts {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                end_of_opts = true;
                return arg;
            }
            let (opt, value) = match s.split_once('=') {
                Some((o, v)) => (o, Some(v)),
                None => (s, None),
            };
            match legacy.iter().find(|(old, _)| *old == opt) {
                Some((_, long)) => {
                    trace!("Rewriting option {opt} as --{long}");
                    match value {
                        Some(v) => OsString::from(format!("--{long}={v}")),
                        None => OsString::from(format!("--{long}")),
                    }
                }
                None => arg,
            }
        })
        .collect()
}
