use crate::core::data::point::Point;

/// Pixels on the segment between `from` and `to`, both ends included.
#[must_use]
pub fn line_pixels(from: Point, to: Point) -> Vec<Point> {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = -(i64::from(to.y) - i64::from(from.y)).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut pixels = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut current = from;
    let mut error = dx + dy;

    loop {
        pixels.push(current);

        if current == to {
            return pixels;
        }

        let doubled = 2 * error;

        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }

        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }
}
