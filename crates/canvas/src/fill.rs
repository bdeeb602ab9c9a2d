//! 4-connected scanline flood fill
//!
//! Paints whole horizontal runs per queue step instead of single pixels,
//! which keeps the work queue small on large regions.

use std::collections::VecDeque;

use glam::IVec2;
use tracing::debug;

use crate::color::Rgba;
use crate::surface::Surface;

/// Work-queue discipline for the fill frontier
///
/// The set of filled pixels is identical for both orders; only traversal
/// order and queue locality differ. [`flood_fill`] uses FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOrder {
    /// Process the oldest frontier entries first (breadth-first)
    Fifo,
    /// Process the newest frontier entries first (depth-first)
    Lifo,
}

/// Flood-fill the 4-connected region around `seed` with `new_color`
///
/// Returns whether any pixel changed. A seed outside the surface and a
/// region already at `new_color` are both silent no-ops: clicking outside
/// the canvas or re-filling an area is routine user behavior, not an error.
pub fn flood_fill(surface: &mut Surface, seed: IVec2, new_color: Rgba) -> bool {
    flood_fill_ordered(surface, seed, new_color, FillOrder::Fifo)
}

/// Flood fill with an explicit work-queue order
pub fn flood_fill_ordered(
    surface: &mut Surface,
    seed: IVec2,
    new_color: Rgba,
    order: FillOrder,
) -> bool {
    if seed.x < 0 || seed.y < 0 {
        debug!("flood_fill: seed ({}, {}) outside surface", seed.x, seed.y);
        return false;
    }
    let (seed_x, seed_y) = (seed.x as u32, seed.y as u32);
    let Some(old_color) = surface.get_pixel(seed_x, seed_y) else {
        debug!("flood_fill: seed ({}, {}) outside surface", seed.x, seed.y);
        return false;
    };
    if old_color == new_color {
        debug!("flood_fill: region already target color, nothing to do");
        return false;
    }

    let width = surface.width as usize;
    let mut queue = VecDeque::new();
    queue.push_back((seed_x, seed_y));
    let mut painted = 0usize;

    while let Some((x, y)) = next(&mut queue, order) {
        // A point can be enqueued more than once; the run containing it may
        // already be painted by the time it is dequeued.
        if surface.get_pixel(x, y) != Some(old_color) {
            continue;
        }

        // Expand to the full matching run on this row
        let mut west = x;
        while west > 0 && surface.get_pixel(west - 1, y) == Some(old_color) {
            west -= 1;
        }
        let mut east = x + 1;
        while east < surface.width && surface.get_pixel(east, y) == Some(old_color) {
            east += 1;
        }

        // Paint the run in one pass
        let row = (y as usize) * width;
        surface.pixels_mut()[row + west as usize..row + east as usize].fill(new_color);
        painted += (east - west) as usize;

        // Seed the rows above and below from every pixel of the run
        for nx in west..east {
            if y > 0 && surface.get_pixel(nx, y - 1) == Some(old_color) {
                queue.push_back((nx, y - 1));
            }
            if y + 1 < surface.height && surface.get_pixel(nx, y + 1) == Some(old_color) {
                queue.push_back((nx, y + 1));
            }
        }
    }

    debug!(
        "flood_fill: painted {} pixels from seed ({}, {})",
        painted, seed_x, seed_y
    );
    true
}

#[inline]
fn next(queue: &mut VecDeque<(u32, u32)>, order: FillOrder) -> Option<(u32, u32)> {
    match order {
        FillOrder::Fifo => queue.pop_front(),
        FillOrder::Lifo => queue.pop_back(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = Rgba::WHITE;
    const BLACK: Rgba = Rgba::BLACK;
    const GRAY: Rgba = Rgba::rgb(193, 193, 193);
    const BLUE: Rgba = Rgba::rgb(0, 178, 255);

    fn assert_all(surface: &Surface, color: Rgba) {
        for y in 0..surface.height {
            for x in 0..surface.width {
                assert_eq!(surface.get_pixel(x, y), Some(color), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_covers_connected_region() {
        let mut surface = Surface::new(10, 10, WHITE).unwrap();
        assert!(flood_fill(&mut surface, IVec2::new(5, 5), BLACK));
        assert_all(&surface, BLACK);
    }

    #[test]
    fn test_seed_out_of_bounds_is_noop() {
        let mut surface = Surface::new(10, 10, WHITE).unwrap();
        let before = surface.fingerprint();

        assert!(!flood_fill(&mut surface, IVec2::new(-1, 5), BLACK));
        assert!(!flood_fill(&mut surface, IVec2::new(5, -3), BLACK));
        assert!(!flood_fill(&mut surface, IVec2::new(10, 5), BLACK));
        assert!(!flood_fill(&mut surface, IVec2::new(5, 10), BLACK));
        assert_eq!(surface.fingerprint(), before);
    }

    #[test]
    fn test_same_color_is_noop() {
        let mut surface = Surface::new(10, 10, WHITE).unwrap();
        let before = surface.fingerprint();

        assert!(!flood_fill(&mut surface, IVec2::new(5, 5), WHITE));
        assert_eq!(surface.fingerprint(), before);
    }

    #[test]
    fn test_fill_stays_inside_border() {
        // White region left of a gray column, blue region right of it
        let mut surface = Surface::new(9, 9, WHITE).unwrap();
        for y in 0..9 {
            surface.set_pixel(4, y, GRAY);
            for x in 5..9 {
                surface.set_pixel(x, y, BLUE);
            }
        }

        assert!(flood_fill(&mut surface, IVec2::new(1, 1), BLACK));

        for y in 0..9 {
            for x in 0..4 {
                assert_eq!(surface.get_pixel(x, y), Some(BLACK));
            }
            assert_eq!(surface.get_pixel(4, y), Some(GRAY));
            for x in 5..9 {
                assert_eq!(surface.get_pixel(x, y), Some(BLUE));
            }
        }
    }

    #[test]
    fn test_fill_stops_at_canvas_edges() {
        // Region touching every edge must not wrap or scan out of bounds
        let mut surface = Surface::new(3, 3, WHITE).unwrap();
        assert!(flood_fill(&mut surface, IVec2::new(0, 0), BLUE));
        assert_all(&surface, BLUE);
    }

    #[test]
    fn test_one_pixel_wide_canvas() {
        let mut surface = Surface::new(1, 5, WHITE).unwrap();
        surface.set_pixel(0, 3, GRAY);

        assert!(flood_fill(&mut surface, IVec2::new(0, 1), BLACK));

        for y in 0..3 {
            assert_eq!(surface.get_pixel(0, y), Some(BLACK));
        }
        assert_eq!(surface.get_pixel(0, 3), Some(GRAY));
        assert_eq!(surface.get_pixel(0, 4), Some(WHITE));
    }

    #[test]
    fn test_enclosed_hole_is_not_filled() {
        // A gray ring with a white interior; filling outside leaves the
        // interior untouched.
        let mut surface = Surface::new(7, 7, WHITE).unwrap();
        for i in 1..6 {
            surface.set_pixel(i, 1, GRAY);
            surface.set_pixel(i, 5, GRAY);
            surface.set_pixel(1, i, GRAY);
            surface.set_pixel(5, i, GRAY);
        }

        assert!(flood_fill(&mut surface, IVec2::new(0, 0), BLACK));

        assert_eq!(surface.get_pixel(3, 3), Some(WHITE));
        assert_eq!(surface.get_pixel(1, 3), Some(GRAY));
        assert_eq!(surface.get_pixel(0, 3), Some(BLACK));
        assert_eq!(surface.get_pixel(6, 6), Some(BLACK));
    }

    // Gray walls with alternating gaps form a serpentine corridor, so the
    // frontier must snake through several concavities and FIFO and LIFO
    // traversals genuinely diverge before covering the same region.
    fn serpentine_surface() -> Surface {
        let mut surface = Surface::new(16, 16, WHITE).unwrap();
        for (wall_x, gap_at_bottom) in [(3u32, true), (7, false), (11, true)] {
            for y in 0..16 {
                let in_gap = if gap_at_bottom { y >= 13 } else { y < 3 };
                if !in_gap {
                    surface.set_pixel(wall_x, y, GRAY);
                }
            }
        }
        surface
    }

    #[test]
    fn test_fifo_and_lifo_fill_identically() {
        let mut fifo = serpentine_surface();
        let mut lifo = serpentine_surface();
        assert_eq!(fifo.as_bytes(), lifo.as_bytes());

        let seed = IVec2::new(0, 0);
        assert!(flood_fill_ordered(&mut fifo, seed, BLACK, FillOrder::Fifo));
        assert!(flood_fill_ordered(&mut lifo, seed, BLACK, FillOrder::Lifo));

        assert_eq!(fifo.as_bytes(), lifo.as_bytes());
        // The corridor is one 4-connected region, so the far end is reached
        assert_eq!(fifo.get_pixel(15, 0), Some(BLACK));
        assert_eq!(fifo.get_pixel(15, 15), Some(BLACK));
        // Walls are untouched
        assert_eq!(fifo.get_pixel(3, 0), Some(GRAY));
        assert_eq!(fifo.get_pixel(7, 15), Some(GRAY));
    }
}
