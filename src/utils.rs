pub fn slice_as_raw<T>(slice: &[T]) -> &[u8] {
    unsafe {
        core::slice::from_raw_parts(
            slice.as_ptr() as *const u8,
            slice.len() * core::mem::size_of::<T>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_slice_covers_every_byte() {
        let values = [1.0f32, 2.0, 3.0];
        let raw = slice_as_raw(&values);

        assert_eq!(raw.len(), 12);
        assert_eq!(&raw[0..4], &1.0f32.to_ne_bytes());
    }
}
