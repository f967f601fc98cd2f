/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for efficient neighbor lookups.
 * It divides the viewport into cells sized by the interaction radius, so a
 * neighbor query only inspects the 3x3 block of cells around a position
 * instead of the whole collection.
 *
 * Optimized for performance by:
 * - Using direct coordinate calculations instead of vector operations
 * - Reusing cell storage across rebuilds to avoid reallocations
 * - Avoiding unnecessary bounds checks with clamping
 */

use nannou::prelude::*;

pub struct SpatialGrid {
    pub cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        let cols = Self::axis_cells(width, cell_size);
        let rows = Self::axis_cells(height, cell_size);

        Self {
            cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); cols * rows],
        }
    }

    fn axis_cells(extent: f32, cell_size: f32) -> usize {
        ((extent / cell_size).ceil() as usize).max(1)
    }

    // Rebuild cell storage when the viewport or cell size has changed.
    // Keeps existing allocations when the dimensions are stable.
    pub fn resize(&mut self, cell_size: f32, width: f32, height: f32) {
        let cols = Self::axis_cells(width, cell_size);
        let rows = Self::axis_cells(height, cell_size);

        if cols != self.cols || rows != self.rows || cell_size != self.cell_size {
            self.cell_size = cell_size;
            self.cols = cols;
            self.rows = rows;
            self.cells = vec![Vec::new(); cols * rows];
        }
    }

    // Clear the grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    // Convert world coordinates (top-left origin) to a grid cell index
    #[inline]
    fn cell_index(&self, pos: Point2) -> usize {
        let col = ((pos.x / self.cell_size) as isize).clamp(0, self.cols as isize - 1) as usize;
        let row = ((pos.y / self.cell_size) as isize).clamp(0, self.rows as isize - 1) as usize;
        row * self.cols + col
    }

    // Insert an agent index into the cell containing its position
    #[inline]
    pub fn insert(&mut self, agent_index: usize, position: Point2) {
        let cell_index = self.cell_index(position);
        self.cells[cell_index].push(agent_index);
    }

    // Collect agent indices within and adjacent to the cell containing the
    // given position (3x3 block). With cell size >= interaction radius this
    // is a superset of the true neighbor set.
    pub fn nearby_indices(&self, position: Point2, out: &mut Vec<usize>) {
        out.clear();

        let col = ((position.x / self.cell_size) as isize).clamp(0, self.cols as isize - 1);
        let row = ((position.y / self.cell_size) as isize).clamp(0, self.rows as isize - 1);

        let cols = self.cols as isize;
        let rows = self.rows as isize;

        for row_offset in -1..=1 {
            let check_row = row + row_offset;
            if check_row < 0 || check_row >= rows {
                continue;
            }

            let row_base = check_row as usize * self.cols;

            for col_offset in -1..=1 {
                let check_col = col + col_offset;
                if check_col < 0 || check_col >= cols {
                    continue;
                }

                out.extend_from_slice(&self.cells[row_base + check_col as usize]);
            }
        }
    }
}
