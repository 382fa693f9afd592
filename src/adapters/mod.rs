// Adapters layer: concrete implementations for external systems. Today that
// is only input sourcing (puzzle file on disk, literal token lists).

pub mod input;
