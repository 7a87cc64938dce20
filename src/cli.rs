use crate::config::CaptureOptions;

/// Scan the raw argument list once.
///
/// The first token starting with `/` is the page path; `--dark`, `--mobile`
/// and `--full` may appear anywhere in any order. Unrecognized arguments are
/// silently ignored.
pub fn parse_args<I>(args: I) -> CaptureOptions
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut options = CaptureOptions::default();
    let mut have_path = false;

    for arg in args {
        match arg.as_ref() {
            "--dark" => options.dark = true,
            "--mobile" => options.mobile = true,
            "--full" => options.full_page = true,
            arg if !have_path && arg.starts_with('/') => {
                options.page_path = arg.to_string();
                have_path = true;
            }
            _ => {}
        }
    }

    options
}
