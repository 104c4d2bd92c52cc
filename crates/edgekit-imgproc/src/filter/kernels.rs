/// 3x3 kernel responding to vertical edges (changes along x).
///
/// Indexed as `kernel[y][x]`.
pub const VERTICAL_EDGE_KERNEL: [[f32; 3]; 3] = [
    [1.0, 0.0, -1.0],
    [1.0, 0.0, -1.0],
    [1.0, 0.0, -1.0],
];

/// 3x3 kernel responding to horizontal edges (changes along y).
///
/// Indexed as `kernel[y][x]`.
pub const HORIZONTAL_EDGE_KERNEL: [[f32; 3]; 3] = [
    [1.0, 1.0, 1.0],
    [0.0, 0.0, 0.0],
    [-1.0, -1.0, -1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kernels_are_transposed() {
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(VERTICAL_EDGE_KERNEL[y][x], HORIZONTAL_EDGE_KERNEL[x][y]);
            }
        }
    }

    #[test]
    fn test_edge_kernels_sum_to_zero() {
        let sum = |k: &[[f32; 3]; 3]| k.iter().flatten().sum::<f32>();
        assert_eq!(sum(&VERTICAL_EDGE_KERNEL), 0.0);
        assert_eq!(sum(&HORIZONTAL_EDGE_KERNEL), 0.0);
    }
}
