use crate::numeric::Numeric;

/// Keep values strictly greater than `threshold`, in their original order,
/// rendered as uppercased decimal text.
pub fn filter_and_transform<T, U>(data: &[T], threshold: U) -> Vec<String>
where
    T: Numeric,
    U: Numeric,
{
    let result: Vec<String> = data
        .iter()
        .filter(|value| value.exceeds(threshold))
        .map(|value| {
            let mut text = value.canonical_text();
            text.make_ascii_uppercase();
            text
        })
        .collect();

    log::trace!(
        "filter_and_transform: kept {} of {} above {}",
        result.len(),
        data.len(),
        threshold
    );
    result
}
