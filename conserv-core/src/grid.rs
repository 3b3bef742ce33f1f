//! Dense N-dimensional DP storage.
//!
//! A single flat `Vec<T>` with row-major strides: the last axis is
//! contiguous. Cells are addressed either by coordinates or directly by
//! flat offset, which lets the fill loops step along an axis by adding its
//! stride instead of recomputing the index.

#[derive(Debug, Clone)]
pub struct DpGrid<T> {
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<T>,
}

impl<T: Copy> DpGrid<T> {
    /// Allocate a grid with the given axis lengths, every cell set to `fill`.
    ///
    /// Callers size-check the shape against a `ResourceBudget` first.
    pub fn new(shape: &[usize], fill: T) -> Self {
        let mut strides = vec![1; shape.len()];
        for axis in (0..shape.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1];
        }
        let cells = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            strides,
            data: vec![fill; cells],
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn stride(&self, axis: usize) -> usize {
        self.strides[axis]
    }

    pub fn dims(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn offset(&self, index: &[usize]) -> usize {
        debug_assert_eq!(index.len(), self.shape.len());
        index
            .iter()
            .zip(&self.strides)
            .map(|(&i, &stride)| i * stride)
            .sum()
    }

    /// Decode a flat offset into coordinates
    pub fn coords_into(&self, mut offset: usize, out: &mut [usize]) {
        for (axis, &stride) in self.strides.iter().enumerate() {
            out[axis] = offset / stride;
            offset %= stride;
        }
    }

    #[inline]
    pub fn get(&self, index: &[usize]) -> T {
        self.data[self.offset(index)]
    }

    #[inline]
    pub fn set(&mut self, index: &[usize], value: T) {
        let offset = self.offset(index);
        self.data[offset] = value;
    }

    #[inline]
    pub fn at(&self, offset: usize) -> T {
        self.data[offset]
    }

    #[inline]
    pub fn set_at(&mut self, offset: usize, value: T) {
        self.data[offset] = value;
    }

    /// Number of distinct coordinate sums, i.e. wavefronts, in the grid.
    pub fn wavefront_count(&self) -> usize {
        if self.data.is_empty() {
            return 0;
        }
        self.shape.iter().map(|&len| len - 1).sum::<usize>() + 1
    }

    /// Offsets of the cells whose coordinates sum to `sum`, ascending.
    ///
    /// Cells in one front never depend on each other in any recurrence that
    /// only reads component-wise smaller indices, so a front can be filled
    /// concurrently once every lower front is complete. Only one front is
    /// materialized at a time.
    pub fn wavefront(&self, sum: usize) -> Vec<usize> {
        let mut front = Vec::new();
        if self.shape.is_empty() {
            if sum == 0 {
                front.push(0);
            }
        } else if sum < self.wavefront_count() {
            // reach[axis]: largest sum the axes after `axis` can still add
            let mut reach = vec![0usize; self.shape.len()];
            for axis in (0..self.shape.len().saturating_sub(1)).rev() {
                reach[axis] = reach[axis + 1] + self.shape[axis + 1] - 1;
            }
            self.collect_front(0, sum, 0, &reach, &mut front);
        }
        front
    }

    fn collect_front(
        &self,
        axis: usize,
        remaining: usize,
        base: usize,
        reach: &[usize],
        out: &mut Vec<usize>,
    ) {
        let last = self.shape.len() - 1;
        if axis == last {
            if remaining < self.shape[last] {
                out.push(base + remaining * self.strides[last]);
            }
            return;
        }
        let low = remaining.saturating_sub(reach[axis]);
        let high = remaining.min(self.shape[axis] - 1);
        for value in low..=high {
            self.collect_front(axis + 1, remaining - value, base + value * self.strides[axis], reach, out);
        }
    }
}

impl<T> std::ops::Index<usize> for DpGrid<T> {
    type Output = T;

    fn index(&self, offset: usize) -> &T {
        &self.data[offset]
    }
}
