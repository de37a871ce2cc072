//! # Data Loader Crate
//!
//! This crate loads the award nomination list and keeps it in an in-memory,
//! indexed record store.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, NewMovie, MoviePatch, AwardIndex)
//! - **parser**: Parse the `;`-delimited CSV into rows
//! - **index**: Build and maintain the secondary indices
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::AwardIndex;
//! use std::path::Path;
//!
//! let index = AwardIndex::load_from_file(Path::new("data/movielist.csv"))?;
//!
//! let movie = index.get(1).unwrap();
//! let winners = index.winners();
//!
//! println!("{} won in {}", movie.title, movie.year);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieId,
    Year,
    // Core types
    Movie,
    NewMovie,
    MoviePatch,
    AwardIndex,
};
