use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Reinterpret a row of pixels as the raw byte sequence the encoder consumes.
pub fn row_bytes(row: &[Pixel]) -> &[u8] {
    bytemuck::cast_slice(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_bytes_is_packed_rgb() {
        let row = [Pixel { r: 1, g: 2, b: 3 }, Pixel { r: 4, g: 5, b: 6 }];
        assert_eq!(row_bytes(&row), &[1, 2, 3, 4, 5, 6]);
    }
}
