//! Category label selection.

use crate::series::DataPoint;

/// Indices of the points whose labels should be shown.
///
/// Hidden points, the synthetic trailing point included, are never selected.
/// With `label_count == None` every visible point is labeled. Otherwise at
/// most `label_count` visible points are picked, spread evenly so that the
/// first and last visible points are labeled whenever two or more labels fit.
pub fn select_labels(points: &[DataPoint], label_count: Option<usize>) -> Vec<usize> {
    let visible: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.is_visible())
        .map(|(index, _)| index)
        .collect();

    let Some(count) = label_count else {
        return visible;
    };
    let total = visible.len();
    if count >= total {
        return visible;
    }
    match count {
        0 => Vec::new(),
        1 => vec![visible[0]],
        _ => {
            // Rounded positions over `total - 1` gaps; the step is at least
            // one so positions never repeat.
            let gaps = count - 1;
            (0..count)
                .map(|i| visible[(i * (total - 1) + gaps / 2) / gaps])
                .collect()
        }
    }
}
