//! Runtime favicon: a fixed glyph rasterized into a small RGBA bitmap and
//! encoded as an ICO `data:` URL the page can install as its icon.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const FAVICON_SIZE: u32 = 16;

const GLYPH: [&str; 7] = [
    ".###.",
    "#...#",
    "#....",
    ".###.",
    "....#",
    "#...#",
    ".###.",
];
const GLYPH_SCALE: u32 = 2;

const BACKGROUND: [u8; 4] = [0xE5, 0x09, 0x14, 0xFF];
const FOREGROUND: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Offscreen RGBA bitmap, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; (width * height) as usize],
        }
    }

    /// The page icon: the glyph in white on a square with clipped corners.
    pub fn favicon() -> Self {
        let mut bitmap = Self::new(FAVICON_SIZE, FAVICON_SIZE);
        let last = FAVICON_SIZE - 1;
        for y in 0..FAVICON_SIZE {
            for x in 0..FAVICON_SIZE {
                let corner = (x == 0 || x == last) && (y == 0 || y == last);
                if !corner {
                    bitmap.set(x, y, BACKGROUND);
                }
            }
        }

        let glyph_w = GLYPH[0].len() as u32 * GLYPH_SCALE;
        let glyph_h = GLYPH.len() as u32 * GLYPH_SCALE;
        let origin_x = (FAVICON_SIZE - glyph_w) / 2;
        let origin_y = (FAVICON_SIZE - glyph_h) / 2;
        for (row, line) in GLYPH.iter().enumerate() {
            for (col, cell) in line.bytes().enumerate() {
                if cell != b'#' {
                    continue;
                }
                for dy in 0..GLYPH_SCALE {
                    for dx in 0..GLYPH_SCALE {
                        bitmap.set(
                            origin_x + col as u32 * GLYPH_SCALE + dx,
                            origin_y + row as u32 * GLYPH_SCALE + dy,
                            FOREGROUND,
                        );
                    }
                }
            }
        }
        bitmap
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = rgba;
        }
    }

    /// Encodes a single-image ICO with a 32-bit BMP payload.
    pub fn to_ico(&self) -> Vec<u8> {
        let mask_stride = self.width.div_ceil(32) * 4;
        let xor_len = self.width * self.height * 4;
        let and_len = mask_stride * self.height;
        let image_len = 40 + xor_len + and_len;

        let mut out = Vec::with_capacity(22 + image_len as usize);
        // ICONDIR
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        // ICONDIRENTRY; a dimension of 256 is stored as 0.
        out.push(self.width.min(256) as u8);
        out.push(self.height.min(256) as u8);
        out.push(0);
        out.push(0);
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&32u16.to_le_bytes());
        out.extend_from_slice(&image_len.to_le_bytes());
        out.extend_from_slice(&22u32.to_le_bytes());
        // BITMAPINFOHEADER; height covers both the colour and the mask plane.
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&(self.width as i32).to_le_bytes());
        out.extend_from_slice(&((self.height * 2) as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&32u16.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&xor_len.to_le_bytes());
        out.extend_from_slice(&[0u8; 16]);
        // Pixel rows bottom-up, BGRA.
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
                out.extend_from_slice(&[b, g, r, a]);
            }
        }
        // Alpha channel carries transparency, so the AND mask stays empty.
        out.resize(out.len() + and_len as usize, 0);
        out
    }

    pub fn to_data_url(&self) -> String {
        format!("data:image/x-icon;base64,{}", STANDARD.encode(self.to_ico()))
    }
}
