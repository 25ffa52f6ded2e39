/// Default slide key type for registries keyed by a plain integer handle.
pub type SlideKey = u64;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait NavKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> NavKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait NavKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> NavKey for K {}

/// The two states of the navigation machine.
///
/// While [`Transitioning`](NavPhase::Transitioning), `goto` calls are ignored so overlapping
/// scroll/resize/keyboard triggers cannot start conflicting animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavPhase {
    Idle,
    Transitioning,
}

/// Slide geometry as measured by the rendering layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    /// Vertical position of the slide's top edge within the scrollable container.
    pub offset_top: u64,
    /// Height of the slide in the scroll axis.
    pub height: u32,
}

impl Slide {
    pub fn new(offset_top: u64, height: u32) -> Self {
        Self { offset_top, height }
    }

    pub fn bottom(&self) -> u64 {
        self.offset_top.saturating_add(self.height as u64)
    }
}

/// A registered slide: stable identity plus its reported geometry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideEntry<K> {
    pub key: K,
    /// Vertical position of the slide's top edge within the scrollable container.
    pub offset_top: u64,
    /// Height of the slide in the scroll axis.
    pub height: u32,
}

impl<K> SlideEntry<K> {
    pub fn slide(&self) -> Slide {
        Slide {
            offset_top: self.offset_top,
            height: self.height,
        }
    }

    pub fn bottom(&self) -> u64 {
        self.offset_top.saturating_add(self.height as u64)
    }
}

/// The renderable output of the navigation machine.
///
/// The engine only decides *where* to go and *how long* the move should take; the rendering
/// layer owns interpolation of the visual transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideTransform {
    /// Target vertical translation, clamped so content never scrolls past its end.
    pub translate_y: i64,
    /// Duration the rendering layer should animate over.
    pub duration_ms: u64,
}
