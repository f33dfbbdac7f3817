use anyhow::Result;
use console_engine::screen::Screen;

use crate::prelude::ReplayError;

/// Enlarges every cell of `screen` into a `scale` x `scale` block.
pub fn render_scaled(
    screen: &Screen,
    scale: u32,
) -> Result<Screen> {
    if scale == 0 {
        return Err(ReplayError::InvalidParameter("render scale must be greater than zero").into());
    }
    let (width, height) = (screen.get_width(), screen.get_height());
    let mut scaled = Screen::new_empty(width * scale, height * scale);
    scaled.clear();
    for y in 0..height {
        for x in 0..width {
            let pixel = screen.get_pxl(x as i32, y as i32).map_err(ReplayError::Render)?;
            for dy in 0..scale {
                for dx in 0..scale {
                    scaled.set_pxl((x * scale + dx) as i32, (y * scale + dy) as i32, pixel.clone());
                }
            }
        }
    }
    Ok(scaled)
}

/// Text lines of the screen content, without colors
pub fn screen_to_text(screen: &Screen) -> Result<String> {
    let mut text = String::with_capacity(((screen.get_width() + 1) * screen.get_height()) as usize);
    for y in 0..screen.get_height() {
        for x in 0..screen.get_width() {
            text.push(screen.get_pxl(x as i32, y as i32).map_err(ReplayError::Render)?.chr);
        }
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use console_engine::pixel;

    use super::*;

    #[test]
    fn test_render_scaled() -> Result<()> {
        let mut screen = Screen::new_empty(2, 3);
        screen.clear();
        screen.set_pxl(1, 2, pixel::pxl('x'));

        let scaled = render_scaled(&screen, 3)?;
        assert_eq!(scaled.get_width(), 6);
        assert_eq!(scaled.get_height(), 9);
        for y in 6..9 {
            for x in 3..6 {
                assert_eq!(scaled.get_pxl(x, y).unwrap().chr, 'x');
            }
        }
        assert_eq!(scaled.get_pxl(2, 5).unwrap().chr, ' ');
        Ok(())
    }

    #[test]
    fn test_scale_one_keeps_size() -> Result<()> {
        let screen = Screen::new(4, 4);
        let scaled = render_scaled(&screen, 1)?;
        assert_eq!((scaled.get_width(), scaled.get_height()), (4, 4));
        Ok(())
    }

    #[test]
    fn test_screen_to_text() -> Result<()> {
        let mut screen = Screen::new(3, 2);
        screen.set_pxl(0, 0, pixel::pxl('a'));
        screen.set_pxl(2, 1, pixel::pxl('b'));
        assert_eq!(screen_to_text(&screen)?, "a  \n  b\n");
        Ok(())
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let screen = Screen::new(1, 1);
        assert!(render_scaled(&screen, 0).is_err());
    }
}
