use std::path::PathBuf;

/// Name of the only dataset whose second column is a filesize instead of a time.
pub const COMPRESSION_DATASET: &str = "Compression";
pub const X_LABEL: &str = "Elements";
pub const Y_LABEL_FILESIZE: &str = "Filesize (bytes)";
pub const Y_LABEL_TIME: &str = "Time (μs)";

/// The benchmarks write one file per dataset, named after the dataset.
/// Append the suffix instead of using `with_extension`,
/// otherwise a dotted name such as `v1.2` would lose its last part.
pub fn input_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", name))
}

/// The compression benchmark measures the file size, all the others measure time.
pub fn suitable_ylabel(name: &str) -> &'static str {
    if name == COMPRESSION_DATASET {
        Y_LABEL_FILESIZE
    } else {
        Y_LABEL_TIME
    }
}

/// Min and max over the iterator, None if it is empty.
pub fn min_and_max<'a, I, T>(s: I) -> Option<(T, T)>
where
    I: Iterator<Item = &'a T>,
    T: 'a + std::cmp::PartialOrd + Clone,
{
    s.fold(None::<(&'a T, &'a T)>, |bounds, v| match bounds {
        None => Some((v, v)),
        Some((lo, hi)) => Some((if v < lo { v } else { lo }, if v > hi { v } else { hi })),
    })
    .map(|(lo, hi)| (lo.clone(), hi.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_path_appends_suffix() {
        assert_eq!(input_path("Insert"), PathBuf::from("Insert.csv"));
        assert_eq!(input_path("v1.2"), PathBuf::from("v1.2.csv"));
    }

    #[test]
    fn ylabel_depends_on_exact_name() {
        assert_eq!(suitable_ylabel("Compression"), "Filesize (bytes)");
        assert_eq!(suitable_ylabel("Latency"), "Time (μs)");
        assert_eq!(suitable_ylabel("compression"), "Time (μs)");
        assert_eq!(suitable_ylabel("Compression "), "Time (μs)");
    }

    #[test]
    fn min_and_max_of_unordered_values() {
        let v = vec![10i64, 20, 15, -3, 7];
        assert_eq!(min_and_max(v.iter()), Some((-3, 20)));
    }

    #[test]
    fn min_and_max_of_single_value() {
        let v = vec![42i64];
        assert_eq!(min_and_max(v.iter()), Some((42, 42)));
    }

    #[test]
    fn min_and_max_of_nothing() {
        let v: Vec<i64> = Vec::new();
        assert_eq!(min_and_max(v.iter()), None);
    }
}
