//! Row-major RGB pixel buffer, allocated once per output size.

use sdf::Rgb;

use crate::error::RenderError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Reallocates for a new output size. Returns `false` and keeps the
    /// current contents when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        *self = Self::new(width, height);
        true
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        self.pixels.get(start..start + width)
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width {
            return None;
        }
        self.row(y).map(|row| row[x as usize])
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Packed RGB8 bytes, three per pixel, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copies the frame into a presentation buffer of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::BufferSize`] if `target` has a different
    /// pixel count.
    pub fn copy_to(&self, target: &mut [Rgb]) -> Result<(), RenderError> {
        if target.len() != self.pixels.len() {
            return Err(RenderError::BufferSize {
                expected: self.pixels.len(),
                actual: target.len(),
            });
        }
        target.copy_from_slice(&self.pixels);
        Ok(())
    }
}
