/// Frames cycled while a connection is pending.
const FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// A ticking progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// Advances to the next frame, wrapping around.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// Index of the current frame.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Symbol for the current frame.
    pub fn symbol(&self) -> &'static str {
        FRAMES[self.frame]
    }

    /// Rewinds to the first frame.
    pub fn reset(&mut self) {
        self.frame = 0;
    }
}
