/// Selection seams: borrowed records and progress observers

pub mod impls;
pub mod traits;

pub use traits::{Selectable, SelectionObserver, SelectionStep};

pub use impls::{NoopObserver, ProgressBarObserver, TracingObserver};
