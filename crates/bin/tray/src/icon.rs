//! Icon utilities for the tray application.

/// Width of the icon image.
pub const WIDTH: u32 = 32;

/// Height of the icon image.
pub const HEIGHT: u32 = 32;

/// Draw an envelope: a white card with a dark border and flap.
pub fn envelope() -> Result<tray_icon::Icon, tray_icon::BadIcon> {
    let mut rgba = Vec::with_capacity(WIDTH as usize * HEIGHT as usize * 4);

    let (top, bottom) = (6, HEIGHT - 7);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let inside = (top..=bottom).contains(&y);
            let border = inside && (y == top || y == bottom || x == 0 || x == WIDTH - 1);
            // The flap: two diagonals meeting in the middle.
            let row = y.wrapping_sub(top);
            let flap = inside && row <= WIDTH / 4 && (row == x / 2 || row == (WIDTH - 1 - x) / 2);

            let pixel = match (inside, border || flap) {
                (false, _) => [0, 0, 0, 0],
                (true, true) => [40, 40, 40, 255],
                (true, false) => [250, 250, 250, 255],
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    tray_icon::Icon::from_rgba(rgba, WIDTH, HEIGHT)
}
