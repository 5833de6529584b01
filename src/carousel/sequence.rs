//! Extended slide sequence with boundary clones.
//!
//! The carousel never scrolls the real item list directly. It scrolls an
//! extended sequence `[clone of last] + items + [clone of first]` so that
//! moving past either end lands on something that looks like the wrapped
//! neighbour. Slides index into the item list instead of copying items.
//!
//! ```text
//! items:     A  B  C
//! sequence: [C] A  B  C [A]
//! render:    0  1  2  3  4
//! ```

/// One positioned occurrence of an item in the extended sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Position in the extended sequence.
    pub render_index: usize,
    /// Index of the displayed item in the real item list.
    pub source_index: usize,
    /// Whether this slide duplicates an item shown elsewhere in the sequence.
    pub is_clone: bool,
}

/// The physically scrollable sequence plus the number of clones on each side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedSequence {
    /// Slides in render order.
    pub slides: Vec<Slide>,
    /// Clones on each side: `1` for two or more items, otherwise `0`.
    pub clone_count: usize,
}

impl ExtendedSequence {
    /// Number of slides, clones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a render index, if it exists.
    #[must_use]
    pub fn get(&self, render_index: usize) -> Option<&Slide> {
        self.slides.get(render_index)
    }
}

/// Builds the extended sequence for `item_count` real items.
///
/// - `0` items: empty sequence, no clones
/// - `1` item: the item alone, no clones (a lone item cannot loop)
/// - `n >= 2`: last item cloned in front, first item cloned at the back
///
/// # Examples
///
/// ```
/// use tour_carousel::carousel::build_sequence;
///
/// let seq = build_sequence(3);
/// let sources: Vec<usize> = seq.slides.iter().map(|s| s.source_index).collect();
/// assert_eq!(sources, vec![2, 0, 1, 2, 0]);
/// assert_eq!(seq.clone_count, 1);
/// ```
#[must_use]
pub fn build_sequence(item_count: usize) -> ExtendedSequence {
    let clone_count = usize::from(item_count > 1);
    let mut slides = Vec::with_capacity(item_count + 2 * clone_count);

    if clone_count == 1 {
        slides.push(Slide {
            render_index: 0,
            source_index: item_count - 1,
            is_clone: true,
        });
    }

    slides.extend((0..item_count).map(|source_index| Slide {
        render_index: clone_count + source_index,
        source_index,
        is_clone: false,
    }));

    if clone_count == 1 {
        slides.push(Slide {
            render_index: item_count + clone_count,
            source_index: 0,
            is_clone: true,
        });
    }

    ExtendedSequence {
        slides,
        clone_count,
    }
}
