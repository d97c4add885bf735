/// A row-major plane of unrounded luma or chroma samples.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Plane {
    samples: Vec<f32>,
    width: usize,
    height: usize,
}

impl Plane {
    /// Builds a plane by evaluating `f(x, y)` for every position.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut samples = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }

        Self { samples, width, height }
    }

    /// Width in samples.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in samples.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Size of the plane as `(w, h)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Sample at column `x` of row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.samples[x + y * self.width]
    }

    /// All samples, row-major.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// One row of samples.
    #[must_use]
    pub fn row(&self, y: usize) -> &[f32] {
        &self.samples[y * self.width..(y + 1) * self.width]
    }

    /// Averages non-overlapping 2x2 blocks into a plane of half width and half height.
    ///
    /// A trailing odd row or column has no block partner and is ignored.
    pub fn subsample_2x2(&self) -> Self {
        Self::from_fn(self.width / 2, self.height / 2, |x, y| {
            let (px, py) = (x * 2, y * 2);

            let sum = self.get(px, py) + self.get(px + 1, py) + self.get(px, py + 1) + self.get(px + 1, py + 1);

            sum / 4.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Plane;

    #[test]
    fn from_fn_is_row_major() {
        let plane = Plane::from_fn(3, 2, |x, y| (x + 10 * y) as f32);

        assert_eq!(plane.as_slice(), [0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(plane.row(1), [10.0, 11.0, 12.0]);
        assert_eq!(plane.get(2, 1), 12.0);
        assert_eq!(plane.dimensions(), (3, 2));
    }

    #[test]
    fn subsample_averages_blocks() {
        #[rustfmt::skip]
        let values = [
            1.0, 3.0, 10.0, 10.0,
            5.0, 7.0, 20.0, 30.0,
        ];
        let plane = Plane::from_fn(4, 2, |x, y| values[x + y * 4]);
        let half = plane.subsample_2x2();

        assert_eq!(half.dimensions(), (2, 1));
        assert_eq!(half.as_slice(), [4.0, 17.5]);
    }

    #[test]
    fn subsample_ignores_odd_remainder() {
        let plane = Plane::from_fn(3, 3, |x, y| if x == 2 || y == 2 { 1000.0 } else { 2.0 });
        let half = plane.subsample_2x2();

        assert_eq!(half.dimensions(), (1, 1));
        assert_eq!(half.get(0, 0), 2.0);
    }
}
