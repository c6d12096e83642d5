//! Cloth mesh: a particle grid with structural, shear, and bend springs.

use crate::error::ClothError;
use crate::float::Float;
use crate::particle::{Particle, Rgba};
use crate::spring::{Spring, SpringKind};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Columns pinned from each top corner at generation time.
const CORNER_PINS: usize = 3;

/// Rows at the bottom of the mesh that receive no bend springs.
const BEND_FREE_ROWS: usize = 4;

/// Layout of a cloth grid.
#[derive(Clone, Debug)]
pub struct MeshConfig<F: Float> {
    pub rows: usize,
    pub cols: usize,
    /// Position of the top-left particle.
    pub origin: Vec3<F>,
    pub base_color: Rgba,
    /// Color of odd-row, odd-column particles.
    pub accent_color: Rgba,
}

impl<F: Float> MeshConfig<F> {
    pub fn new(rows: usize, cols: usize) -> Self {
        MeshConfig {
            rows,
            cols,
            origin: Vec3::zero(),
            base_color: Rgba::LINEN,
            accent_color: Rgba::ORANGE,
        }
    }

    pub fn with_origin(mut self, origin: Vec3<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_colors(mut self, base: Rgba, accent: Rgba) -> Self {
        self.base_color = base;
        self.accent_color = accent;
        self
    }
}

/// A cloth mesh built from a grid of Verlet particles.
///
/// Particle at (row, col) has index `row * cols + col`. Row 0 is the top edge;
/// rows extend in negative Y and columns in positive X. The grid spans two
/// world units along each axis whatever its resolution.
#[derive(Clone, Debug)]
pub struct ClothMesh<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    /// Pinned particle indices in pin order.
    pinned: AllocVec<usize>,
    rows: usize,
    cols: usize,
    spacing: (F, F),
}

impl<F: Float> ClothMesh<F> {
    /// Build the particle grid and spring topology, then pin the three
    /// leftmost and three rightmost particles of the top row.
    ///
    /// Springs are emitted cell by cell, row-major. Each cell contributes:
    /// - Structural: left and right vertical edges, top and bottom horizontal
    ///   edges (edges shared by two cells appear once per cell)
    /// - Shear: both diagonals (rest = sqrt(dx² + dy²))
    /// - Bend: skip-one vertical and skip-one horizontal from the cell's
    ///   top-left particle (rest = 2 * spacing), only when the cell row is at
    ///   least four rows above the bottom edge and, for the horizontal one,
    ///   when a particle two columns over exists
    pub fn new(config: &MeshConfig<F>, mass: F) -> Result<Self, ClothError> {
        let (rows, cols) = (config.rows, config.cols);
        if rows < 2 || cols < 2 {
            return Err(ClothError::InvalidGridDimensions { rows, cols });
        }
        if !mass.is_positive_finite() {
            return Err(ClothError::InvalidMass);
        }

        let dx = F::two() / F::from_f32((cols - 1) as f32);
        let dy = F::two() / F::from_f32((rows - 1) as f32);

        let mut particles = AllocVec::with_capacity(rows * cols);
        let mut cursor = config.origin;
        for row in 0..rows {
            cursor.x = config.origin.x;
            for col in 0..cols {
                let color = if row % 2 != 0 && col % 2 != 0 {
                    config.accent_color
                } else {
                    config.base_color
                };
                particles.push(Particle::new(cursor, mass, color));
                cursor.x = cursor.x + dx;
            }
            cursor.y = cursor.y - dy;
        }

        let springs = Self::build_springs(rows, cols, dx, dy);

        let mut mesh = ClothMesh {
            particles,
            springs,
            pinned: AllocVec::new(),
            rows,
            cols,
            spacing: (dx, dy),
        };

        let width = CORNER_PINS.min(cols);
        for col in 0..width {
            mesh.pin(0, col);
        }
        for col in (cols - width..cols).rev() {
            mesh.pin(0, col);
        }

        log::debug!(
            "built {}x{} cloth mesh: {} particles, {} springs, {} pinned",
            rows,
            cols,
            mesh.particles.len(),
            mesh.springs.len(),
            mesh.pinned.len(),
        );

        Ok(mesh)
    }

    fn build_springs(rows: usize, cols: usize, dx: F, dy: F) -> AllocVec<Spring<F>> {
        let diag_length = (dx * dx + dy * dy).sqrt();
        let bend_x = dx + dx;
        let bend_y = dy + dy;
        let idx = |row: usize, col: usize| row * cols + col;

        let mut springs = AllocVec::with_capacity(expected_spring_count(rows, cols));
        for row in 0..rows - 1 {
            let bend_row = row + BEND_FREE_ROWS < rows;
            for col in 0..cols - 1 {
                let tl = idx(row, col);
                let tr = idx(row, col + 1);
                let bl = idx(row + 1, col);
                let br = idx(row + 1, col + 1);

                springs.push(Spring::new(tl, bl, dy, SpringKind::Structural));
                springs.push(Spring::new(tl, tr, dx, SpringKind::Structural));
                springs.push(Spring::new(tr, br, dy, SpringKind::Structural));
                springs.push(Spring::new(bl, br, dx, SpringKind::Structural));
                springs.push(Spring::new(bl, tr, diag_length, SpringKind::Shear));
                springs.push(Spring::new(tl, br, diag_length, SpringKind::Shear));

                if bend_row {
                    springs.push(Spring::new(tl, idx(row + 2, col), bend_y, SpringKind::Bend));
                    if col + 2 < cols {
                        springs.push(Spring::new(tl, idx(row, col + 2), bend_x, SpringKind::Bend));
                    }
                }
            }
        }
        springs
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Pin the particle at (row, col) and append it to the pinned registry.
    /// Pinning an already pinned particle does nothing.
    pub fn pin(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        let particle = &mut self.particles[idx];
        if particle.pinned {
            return;
        }
        particle.pinned = true;
        self.pinned.push(idx);
    }

    /// Unpin every registered particle in pin order and empty the registry.
    /// Returns how many particles were released.
    pub fn detach(&mut self) -> usize {
        let released = self.pinned.len();
        for idx in self.pinned.drain(..) {
            self.particles[idx].pinned = false;
        }
        released
    }

    /// Render triangulation: two triangles per grid cell.
    pub fn faces(&self) -> Faces {
        Faces::new(self.rows, self.cols)
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }

    /// Split borrow for solvers that read springs while moving particles.
    pub fn parts_mut(&mut self) -> (&mut [Particle<F>], &[Spring<F>]) {
        (&mut self.particles, &self.springs)
    }

    pub fn pinned_indices(&self) -> &[usize] { &self.pinned }
    pub fn particle_at(&self, row: usize, col: usize) -> &Particle<F> {
        &self.particles[self.index(row, col)]
    }
    pub fn particle_at_mut(&mut self, row: usize, col: usize) -> &mut Particle<F> {
        let idx = self.index(row, col);
        &mut self.particles[idx]
    }
    /// Grid spacing as (column spacing, row spacing).
    pub fn spacing(&self) -> (F, F) { self.spacing }
    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
}

/// Number of springs [`ClothMesh::new`] emits for a `rows` x `cols` grid.
pub fn expected_spring_count(rows: usize, cols: usize) -> usize {
    if rows < 2 || cols < 2 {
        return 0;
    }
    let cells = (rows - 1) * (cols - 1);
    let bend_rows = rows.saturating_sub(BEND_FREE_ROWS);
    6 * cells + bend_rows * (cols - 1) + bend_rows * cols.saturating_sub(2)
}

/// Iterator over the mesh triangles as particle index triples.
///
/// For the cell with top-left corner (r, c) it yields the upper triangle
/// `[(r+1, c), (r, c), (r, c+1)]` followed by the lower triangle
/// `[(r+1, c), (r, c+1), (r+1, c+1)]`.
#[derive(Clone, Debug)]
pub struct Faces {
    rows: usize,
    cols: usize,
    cell: usize,
    lower: bool,
}

impl Faces {
    fn new(rows: usize, cols: usize) -> Self {
        Faces { rows, cols, cell: 0, lower: false }
    }

    fn cell_count(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }
}

impl Iterator for Faces {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<[usize; 3]> {
        if self.cell >= self.cell_count() {
            return None;
        }
        let row = self.cell / (self.cols - 1);
        let col = self.cell % (self.cols - 1);
        let tl = row * self.cols + col;
        let tr = tl + 1;
        let bl = tl + self.cols;
        let br = bl + 1;

        let face = if self.lower {
            self.lower = false;
            self.cell += 1;
            [bl, tr, br]
        } else {
            self.lower = true;
            [bl, tl, tr]
        };
        Some(face)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.cell_count() - self.cell) * 2 - usize::from(self.lower);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Faces {}
