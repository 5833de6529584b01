//! Translation between render-space and logical-space indices.
//!
//! Render indices address the extended sequence (clones included) and are
//! used for physical scrolling. Logical indices address the real item list
//! and are the only indices ever exposed to consumers such as the dot row.

/// Converts and wraps indices for a sequence of `item_count` real items.
///
/// # Examples
///
/// ```
/// use tour_carousel::carousel::IndexTranslator;
///
/// let t = IndexTranslator::new(3);
/// assert_eq!(t.to_logical(0), 2); // left clone shows the last item
/// assert_eq!(t.to_logical(4), 0); // right clone shows the first item
/// assert_eq!(t.wrap_for_navigation(-1), 3);
/// assert_eq!(t.wrap_for_navigation(5), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexTranslator {
    item_count: usize,
    clone_count: usize,
}

impl IndexTranslator {
    /// Creates a translator; clones are used when there are two or more items.
    #[must_use]
    pub const fn new(item_count: usize) -> Self {
        Self {
            item_count,
            clone_count: if item_count > 1 { 1 } else { 0 },
        }
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub const fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Maps a render index to the logical index of the item it displays.
    ///
    /// Returns `0` for an empty list. Without clones the render index is
    /// clamped into the item range.
    #[must_use]
    pub const fn to_logical(&self, render_index: usize) -> usize {
        let n = self.item_count;
        if n == 0 {
            return 0;
        }
        if self.clone_count == 0 {
            return if render_index < n { render_index } else { n - 1 };
        }
        // n >= clone_count, so the subtraction cannot underflow
        (render_index + n - self.clone_count) % n
    }

    /// Render index of the slide showing `logical_index` as a real slide.
    #[must_use]
    pub const fn render_for_logical(&self, logical_index: usize) -> usize {
        self.clone_count + logical_index
    }

    /// Wraps a requested render index for explicit prev/next navigation.
    ///
    /// Without clones this is a modular wrap over `[0, item_count - 1]`. With
    /// clones every position in `[0, item_count + 1]` is reachable; a request
    /// below zero lands on the last real slide and a request past the right
    /// clone lands on the first real slide.
    #[must_use]
    pub fn wrap_for_navigation(&self, requested: isize) -> usize {
        let n = self.item_count;
        if n == 0 {
            return 0;
        }

        if self.clone_count == 0 {
            let len = isize::try_from(n).unwrap_or(isize::MAX);
            return usize::try_from(requested.rem_euclid(len)).unwrap_or(0);
        }

        match usize::try_from(requested) {
            Err(_) => self.last_real(),
            Ok(idx) if idx > self.last_index() => self.first_real(),
            Ok(idx) => idx,
        }
    }

    /// Render index of the first real slide.
    #[must_use]
    pub const fn first_real(&self) -> usize {
        self.clone_count
    }

    /// Render index of the last real slide.
    #[must_use]
    pub const fn last_real(&self) -> usize {
        if self.item_count == 0 {
            0
        } else {
            self.item_count + self.clone_count - 1
        }
    }

    /// Highest valid render index (the right clone when clones are used).
    #[must_use]
    pub const fn last_index(&self) -> usize {
        (self.item_count + 2 * self.clone_count).saturating_sub(1)
    }

    /// For a clone slide, the render index of the real slide it mirrors.
    ///
    /// The left clone mirrors the last real slide and the right clone the
    /// first. Returns `None` for real slides and when clones are disabled.
    #[must_use]
    pub const fn mirror_of_clone(&self, render_index: usize) -> Option<usize> {
        if self.clone_count == 0 {
            return None;
        }
        if render_index == 0 {
            Some(self.last_real())
        } else if render_index == self.item_count + self.clone_count {
            Some(self.first_real())
        } else {
            None
        }
    }
}
