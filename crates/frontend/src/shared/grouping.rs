//! Consecutive-run grouping of the order-number column.
//!
//! Lines of the same marketplace order arrive as separate rows; the table
//! pre-sorts by order number so they sit next to each other, and this module
//! computes the CSS classes that frame each run. Groups are recomputed from
//! scratch for every rendered page, there is no incremental diff.

/// Every member cell of a run
pub const GROUP_CELL: &str = "order-group-cell";
/// First cell of a run
pub const GROUP_START: &str = "order-group-start";
/// Last cell of a run
pub const GROUP_END: &str = "order-group-end";

/// Maximal runs of equal consecutive trimmed text, as inclusive
/// `(start, end)` index pairs covering every row exactly once.
pub fn group_runs(texts: &[String]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    if texts.is_empty() {
        return runs;
    }
    let mut start = 0;
    let mut last = texts[0].trim();
    for (i, text) in texts.iter().enumerate().skip(1) {
        let text = text.trim();
        if text != last {
            runs.push((start, i - 1));
            start = i;
            last = text;
        }
    }
    runs.push((start, texts.len() - 1));
    runs
}

/// Class attribute for each order-number cell of one page, derived from the
/// runs of `group_runs`.
pub fn row_classes(texts: &[String]) -> Vec<String> {
    let mut classes = vec![String::new(); texts.len()];
    for (start, end) in group_runs(texts) {
        for class in classes.iter_mut().take(end + 1).skip(start) {
            *class = GROUP_CELL.to_string();
        }
        classes[start] = format!("{} {}", classes[start], GROUP_START);
        classes[end] = format!("{} {}", classes[end], GROUP_END);
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(group_runs(&[]).is_empty());
        assert!(row_classes(&[]).is_empty());
    }

    #[test]
    fn test_runs_partition_all_rows() {
        let t = texts(&["A", "A", "B", "C", "C", "C"]);
        let runs = group_runs(&t);
        assert_eq!(runs, vec![(0, 1), (2, 2), (3, 5)]);

        // every index covered exactly once
        let covered: Vec<usize> = runs.iter().flat_map(|&(s, e)| s..=e).collect();
        assert_eq!(covered, (0..t.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_trimmed_case_sensitive_comparison() {
        let t = texts(&[" A ", "A", "a"]);
        assert_eq!(group_runs(&t), vec![(0, 1), (2, 2)]);
    }

    #[test]
    fn test_row_classes_flag_boundaries() {
        let t = texts(&["A", "A", "B"]);
        let classes = row_classes(&t);
        assert_eq!(classes[0], "order-group-cell order-group-start");
        assert_eq!(classes[1], "order-group-cell order-group-end");
        assert_eq!(
            classes[2],
            "order-group-cell order-group-start order-group-end"
        );
    }

    #[test]
    fn test_every_row_belongs_to_exactly_one_group() {
        let t = texts(&["X", "Y", "Y", "X"]);
        for class in row_classes(&t) {
            assert!(class.contains(GROUP_CELL));
        }
        let runs = group_runs(&t);
        assert_eq!(runs.len(), 3);
    }
}
