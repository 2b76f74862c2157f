//! # Loader Bytecode
//!
//! Store a predicate or script once as a blob, then run it through a tiny loader.
//!
//! A program image carries two section offsets in its header. Everything before
//! the configurable offset is hashed into the program's content identifier and
//! uploaded as a blob; the loader embeds that blob id plus the configurable
//! section, loads the blob at run time and jumps into it.
//!
//! ## Example
//!
//! ```rust
//! use fuelwire_loader::{content_id, synthesize_loader};
//!
//! // 24-byte header + code, configurable offset = 24, then 16 configurable bytes
//! let mut image = vec![0u8; 40];
//! image[8..16].copy_from_slice(&24u64.to_be_bytes());
//! image[16..24].copy_from_slice(&24u64.to_be_bytes());
//! image[24..].fill(0xFF);
//!
//! let blob_id = content_id(&image).unwrap();
//! let loader = synthesize_loader(&image, &blob_id).unwrap();
//! assert_eq!(loader.configurable_section(), &image[24..]);
//! ```

pub mod error;
pub mod ids;
pub mod instructions;
pub mod offsets;
pub mod synthesizer;

pub use error::{LoaderError, Result};
pub use ids::{content_id, legacy_id};
pub use instructions::loader_instructions;
pub use offsets::{read_configurable_offset, read_data_offset};
pub use synthesizer::{synthesize_loader, LoaderBytecode};
