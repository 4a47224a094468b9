use super::constants::SUCCESS_DELAY_MS;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("image sequence must contain at least one image")]
    EmptySequence,
}

/// Ordered, read-only list of image URLs. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSequence {
    images: Vec<String>,
}

impl ImageSequence {
    pub fn new<I, S>(images: I) -> Result<Self, SlideshowError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(SlideshowError::EmptySequence);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn last_index(&self) -> usize {
        self.images.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }
}

/// Visible state of the page.
///
/// `Active`: button visible, message hidden. `Complete`: button hidden,
/// message visible. `Complete` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Active,
    Complete,
}

/// What a single button press asks the page to do.
///
/// - `show`: index of the image to transition to, if the cursor moved
/// - `completed`: true only on the press that enters `Stage::Complete`
/// - `chime_after_ms`: delay before the success chime, set with `completed`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activation {
    pub show: Option<usize>,
    pub completed: bool,
    pub chime_after_ms: Option<u32>,
}

/// Position cursor over an `ImageSequence` plus the Active/Complete machine.
///
/// The cursor starts at 0 and moves forward by one per activation. It is
/// never decremented, never wrapped, and never leaves `[0, len - 1]`.
/// Completion is signalled when the post-increment cursor equals
/// `len - 1`, exactly once.
#[derive(Clone, Debug)]
pub struct Slideshow {
    images: ImageSequence,
    cursor: usize,
    stage: Stage,
}

impl Slideshow {
    pub fn new(images: ImageSequence) -> Self {
        Self {
            images,
            cursor: 0,
            stage: Stage::Active,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.cursor)
    }

    /// Advance the cursor for one button press.
    ///
    /// Presses after completion, or on a single-image sequence where there is
    /// nowhere to advance to, leave the state untouched and return an empty
    /// `Activation`.
    pub fn activate(&mut self) -> Activation {
        if self.stage == Stage::Complete {
            return Activation::default();
        }
        let last = self.images.last_index();
        if self.cursor >= last {
            return Activation::default();
        }
        self.cursor += 1;
        let completed = self.cursor == last;
        if completed {
            self.stage = Stage::Complete;
        }
        Activation {
            show: Some(self.cursor),
            completed,
            chime_after_ms: completed.then_some(SUCCESS_DELAY_MS),
        }
    }
}
