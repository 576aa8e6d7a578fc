//! Machine-face rendering — rotor glyphs and the lamp glow.

use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_4X6, FONT_6X10, FONT_7X13, FONT_9X18};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Gray2;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use layout::SceneLayout;
use sim::InteractionState;

/// Draw the state-dependent parts of the machine face.
///
/// Nothing is drawn while the lid is closed or the cover is open — the
/// backdrop artwork is all there is to see. Otherwise each rotor's position
/// glyph is drawn bottom-anchored and horizontally centered in its window,
/// and in `KeyDown` the lamp-overlay artwork is drawn clipped to the lit
/// lamp's cell, which lights exactly one letter.
///
/// `lamp_art` must already be scaled to the surface; its top-left corner is
/// anchored at the scene's lamp-overlay origin.
///
/// # Errors
///
/// Returns `D::Error` if any drawing operation fails.
pub fn render<D, C, I>(
    display: &mut D,
    scene: &SceneLayout,
    state: InteractionState,
    rotors: [char; 3],
    lamp_art: &I,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Gray2>,
    I: ImageDrawable<Color = C>,
{
    if !state.face_visible() {
        return Ok(());
    }

    let glyph_anchor = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Bottom)
        .build();

    for (glyph, window) in rotors.iter().zip(scene.rotor_windows) {
        let font = rotor_font(window.size.height);
        let style = MonoTextStyle::new(font, C::from(Gray2::BLACK));
        let mut buf = [0_u8; 4];
        let text: &str = glyph.encode_utf8(&mut buf);
        // Anchor on the window's bottom pixel row.
        let anchor = Point::new(
            window.center().x,
            window.top_left.y + window.size.height as i32 - 1,
        );
        Text::with_text_style(text, anchor, style, glyph_anchor).draw(display)?;
    }

    if let Some(lamp) = state.lit_lamp() {
        if let Some(cell) = scene.lamps.rect_for(lamp) {
            Image::new(lamp_art, scene.lamp_overlay.top_left)
                .draw(&mut display.clipped(&cell))?;
        }
    }

    Ok(())
}

/// Largest bitmap font that fits the rotor window height.
///
/// The bezel artwork scales with the surface but bitmap fonts do not, so the
/// glyph steps down through the available sizes instead.
fn rotor_font(window_height: u32) -> &'static MonoFont<'static> {
    const LADDER: [&MonoFont<'static>; 5] =
        [&FONT_10X20, &FONT_9X18, &FONT_7X13, &FONT_6X10, &FONT_4X6];
    for font in LADDER {
        if font.character_size.height <= window_height {
            return font;
        }
    }
    &FONT_4X6
}
