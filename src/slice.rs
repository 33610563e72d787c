use crate::error::AdtError;

/// Access range check: `index` must be in `[0, len)`.
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<usize, AdtError> {
    if index >= len {
        return Err(AdtError::IndexOutOfRange { index, len });
    }
    Ok(index)
}

/// Insertion range check: `index` must be in `[0, len]`, `len` meaning append.
#[inline]
pub fn check_insert_index(index: usize, len: usize) -> Result<usize, AdtError> {
    if index > len {
        return Err(AdtError::IndexOutOfRange { index, len });
    }
    Ok(index)
}

/// Writes `len` elements into `buf` the way the `to_array_into` operations do:
/// reuse `buf` when it can hold every element, putting a `None` sentinel right
/// after the last one when it is strictly larger, otherwise allocate a buffer of
/// exactly `len` slots.
#[cfg(feature = "collections")]
pub(crate) fn fill_buffer<T>(
    mut buf: Vec<Option<T>>,
    len: usize,
    elements: impl Iterator<Item = T>,
) -> Vec<Option<T>> {
    if buf.len() < len {
        return elements.map(Some).collect();
    }
    let mut written = 0;
    for (slot, element) in buf.iter_mut().zip(elements) {
        *slot = Some(element);
        written += 1;
    }
    debug_assert_eq!(written, len);
    if let Some(sentinel) = buf.get_mut(len) {
        *sentinel = None;
    }
    buf
}
