use super::renderer::write_pixel_rgba;
use crate::app::sim::Color;

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;

#[derive(Debug, Clone, Copy)]
struct Glyph {
    rows: [u8; GLYPH_HEIGHT as usize],
}

const SPACE_GLYPH: Glyph = Glyph {
    rows: [0, 0, 0, 0, 0],
};

/// Draws `text` with the 3x5 bitmap font, scaled by an integer factor and
/// clipped to the frame. Characters without a glyph render as a space.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_text_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    mut x: i32,
    y: i32,
    text: &str,
    scale: i32,
    color: Color,
) {
    let scale = scale.max(1);
    let advance = (GLYPH_WIDTH + 1) * scale;
    for ch in text.chars() {
        let glyph = glyph_for(ch).unwrap_or(SPACE_GLYPH);
        draw_glyph_clipped(frame, width, height, x, y, glyph, scale, color);
        x += advance;
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_glyph_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    glyph: Glyph,
    scale: i32,
    color: Color,
) {
    if width == 0 || height == 0 {
        return;
    }

    let width_i32 = width as i32;
    let height_i32 = height as i32;

    for (row_index, row_bits) in glyph.rows.iter().enumerate() {
        let glyph_y = y + row_index as i32 * scale;

        for col in 0..GLYPH_WIDTH {
            if (row_bits & (1 << (GLYPH_WIDTH - 1 - col))) == 0 {
                continue;
            }

            let glyph_x = x + col * scale;
            for sy in 0..scale {
                let pixel_y = glyph_y + sy;
                if pixel_y < 0 || pixel_y >= height_i32 {
                    continue;
                }
                for sx in 0..scale {
                    let pixel_x = glyph_x + sx;
                    if pixel_x < 0 || pixel_x >= width_i32 {
                        continue;
                    }
                    write_pixel_rgba(
                        frame,
                        width as usize,
                        pixel_x as usize,
                        pixel_y as usize,
                        color,
                    );
                }
            }
        }
    }
}

fn glyph_for(ch: char) -> Option<Glyph> {
    let rows = match ch.to_ascii_uppercase() {
        ' ' => return Some(SPACE_GLYPH),
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        _ => return None,
    };
    Some(Glyph { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [255, 255, 255, 255];

    fn blank_frame(width: u32, height: u32) -> Vec<u8> {
        vec![0; (width * height * 4) as usize]
    }

    fn pixel_is_set(frame: &[u8], width: u32, x: u32, y: u32) -> bool {
        let offset = ((y * width + x) * 4) as usize;
        frame[offset..offset + 4] != [0, 0, 0, 0]
    }

    #[test]
    fn digits_letters_and_punctuation_have_glyphs() {
        for ch in "0123456789:!-. ".chars() {
            assert!(glyph_for(ch).is_some(), "missing glyph for {ch:?}");
        }
        for ch in 'A'..='Z' {
            assert!(glyph_for(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        let lower = glyph_for('s').expect("glyph");
        let upper = glyph_for('S').expect("glyph");
        assert_eq!(lower.rows, upper.rows);
    }

    #[test]
    fn unknown_char_has_no_glyph() {
        assert!(glyph_for('\u{2588}').is_none());
    }

    #[test]
    fn drawn_glyph_sets_expected_pixels_at_scale_one() {
        let mut frame = blank_frame(8, 8);
        // 'L' lights the left column and the bottom row.
        draw_text_clipped(&mut frame, 8, 8, 0, 0, "L", 1, WHITE);

        assert!(pixel_is_set(&frame, 8, 0, 0));
        assert!(pixel_is_set(&frame, 8, 0, 4));
        assert!(pixel_is_set(&frame, 8, 2, 4));
        assert!(!pixel_is_set(&frame, 8, 2, 0));
        assert!(!pixel_is_set(&frame, 8, 1, 1));
    }

    #[test]
    fn scale_multiplies_glyph_pixels() {
        let mut frame = blank_frame(16, 16);
        draw_text_clipped(&mut frame, 16, 16, 0, 0, "L", 2, WHITE);

        // Top-left glyph cell becomes a 2x2 block.
        assert!(pixel_is_set(&frame, 16, 0, 0));
        assert!(pixel_is_set(&frame, 16, 1, 1));
        assert!(!pixel_is_set(&frame, 16, 2, 0));
    }

    #[test]
    fn advance_moves_subsequent_characters_right() {
        let mut frame = blank_frame(16, 8);
        draw_text_clipped(&mut frame, 16, 8, 0, 0, "LL", 1, WHITE);

        // Second glyph starts one advance (4 px at scale 1) to the right.
        assert!(pixel_is_set(&frame, 16, 4, 0));
        assert!(!pixel_is_set(&frame, 16, 3, 0));
    }

    #[test]
    fn text_clips_outside_frame_without_panicking() {
        let mut frame = blank_frame(4, 4);
        draw_text_clipped(&mut frame, 4, 4, -2, -2, "88", 3, WHITE);
        draw_text_clipped(&mut frame, 4, 4, 100, 100, "88", 3, WHITE);
    }
}
