pub use derive_more::{Display, From};
