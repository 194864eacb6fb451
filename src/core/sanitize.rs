// src/core/sanitize.rs

/// Turn a free-text label (e.g. a model name) into a safe file stem.
/// Whitespace runs become one '_'; anything but ASCII alphanumerics, '-' and '_'
/// is dropped. Falls back to `fallback` when nothing survives.
pub fn file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us {
                out.push('_');
                last_us = true;
            }
        }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { s!(fallback) } else { s!(out) }
}

#[cfg(test)]
mod tests {
    use super::file_stem;

    #[test]
    fn collapses_and_strips() {
        assert_eq!(file_stem("linear baseline", "model"), "linear_baseline");
        assert_eq!(file_stem("  ARIMA (1,1,1) ", "model"), "ARIMA_111");
        assert_eq!(file_stem("a__b  c", "model"), "a_b_c");
        assert_eq!(file_stem("???", "model"), "model");
        assert_eq!(file_stem("", "model_0"), "model_0");
    }
}
