/// Marker trait for screen state.
///
/// A state value carries everything its view needs to render, and is
/// replaced wholesale by the reducer on every intent.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
