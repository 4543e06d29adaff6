use stegano_dct::ColorMode;

pub mod evaluate;
pub mod hide;
pub mod resize;
pub mod unveil;

fn color_mode(gray: bool) -> ColorMode {
    if gray {
        ColorMode::Luma
    } else {
        ColorMode::Rgb
    }
}
