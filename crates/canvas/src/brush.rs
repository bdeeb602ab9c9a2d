//! Brush and eraser stroke rasterization
//!
//! A stroke is a sequence of overlapping filled circles (dabs) interpolated
//! between pointer samples. The eraser is the same stroke painted in the
//! canvas background color; callers pick the color.

use glam::IVec2;
use tracing::debug;

use crate::color::Rgba;
use crate::surface::Surface;

/// Stamp one filled circle of `radius` pixels centered at `center`
///
/// Every pixel within `radius` of the center (distance-squared test) is set
/// to `color`, clipped to the surface bounds. Radius 0 stamps the center
/// pixel alone; a negative radius stamps nothing.
pub fn paint_dab(surface: &mut Surface, center: IVec2, radius: i32, color: Rgba) {
    if radius < 0 {
        return;
    }
    let x_min = center.x.saturating_sub(radius).max(0);
    let y_min = center.y.saturating_sub(radius).max(0);
    let x_max = center.x.saturating_add(radius).min(surface.width as i32 - 1);
    let y_max = center.y.saturating_add(radius).min(surface.height as i32 - 1);
    if x_min > x_max || y_min > y_max {
        return;
    }

    let r_squared = radius * radius;
    for y in y_min..=y_max {
        let dy = y - center.y;
        for x in x_min..=x_max {
            let dx = x - center.x;
            if dx * dx + dy * dy <= r_squared {
                surface.set_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Paint a stroke segment onto the surface
///
/// With no previous point this stamps a single dab at `to` (the start of a
/// new stroke). Otherwise dabs are interpolated along the segment from
/// `from` to `to`: the sample count comes from the Chebyshev distance
/// `max(|dx|, |dy|)` divided by half the radius, so dab density scales with
/// brush size and adjacent dabs always overlap.
pub fn paint_stroke(
    surface: &mut Surface,
    from: Option<IVec2>,
    to: IVec2,
    radius: i32,
    color: Rgba,
) {
    let Some(from) = from else {
        paint_dab(surface, to, radius, color);
        return;
    };

    let delta = to - from;
    let distance = delta.x.abs().max(delta.y.abs());
    let step = (radius / 2).max(1);
    let steps = ((distance as f32 / step as f32).round() as i32).max(1);

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = from.x + (delta.x as f32 * t) as i32;
        let y = from.y + (delta.y as f32 * t) as i32;
        paint_dab(surface, IVec2::new(x, y), radius, color);
    }
    debug!(
        "paint_stroke: {} dabs from ({}, {}) to ({}, {})",
        steps + 1,
        from.x,
        from.y,
        to.x,
        to.y
    );
}
