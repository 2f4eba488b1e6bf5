const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Formats a byte count as `512 B`, `1.5 KB`, `3.0 GB`.
pub fn human_readable_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

/// Picks the Russian plural form for `count`: one (1, 21), few (2-4, 22) or many (5, 11, 0).
pub fn pluralize<'a>(count: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n = count % 100;
    let n1 = n % 10;

    if 10 < n && n < 20 {
        return many;
    }
    match n1 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_readable_size() {
        assert_eq!(human_readable_size(0), "0 B");
        assert_eq!(human_readable_size(1023), "1023 B");
        assert_eq!(human_readable_size(1024), "1.0 KB");
        assert_eq!(human_readable_size(1536), "1.5 KB");
        assert_eq!(human_readable_size(MB), "1.0 MB");
        assert_eq!(human_readable_size(GB), "1.0 GB");
        assert_eq!(human_readable_size(5 * GB / 2), "2.5 GB");
    }

    #[test]
    fn test_pluralize() {
        let forms = ("file", "files2", "files5");
        let p = |n| pluralize(n, forms.0, forms.1, forms.2);
        assert_eq!(p(1), "file");
        assert_eq!(p(2), "files2");
        assert_eq!(p(4), "files2");
        assert_eq!(p(5), "files5");
        assert_eq!(p(0), "files5");
        assert_eq!(p(11), "files5");
        assert_eq!(p(14), "files5");
        assert_eq!(p(21), "file");
        assert_eq!(p(112), "files5");
        assert_eq!(p(122), "files2");
    }
}
