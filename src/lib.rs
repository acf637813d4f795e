pub mod bit_plan;
pub mod combinatorics;
pub mod draw;
pub mod draw_spec;
pub mod error;
pub mod format;
pub mod index_sampler;
pub mod random_source;
