//! Bidirectional resolution between Suprema device serial numbers and
//! MAC addresses.
//!
//! Suprema prints a 9-digit Device ID (serial number) on each reader
//! and derives the last two MAC octets from its low 16 bits; the MAC's
//! fourth octet identifies the model family. The manufacturer's range
//! tables overlap between model families, so both directions can be
//! ambiguous. This library classifies an input, resolves it against an
//! immutable catalog of published ranges, and reports every candidate
//! together with a best match.
//!
//! - [`catalog`] — the immutable device model table and both OUI
//!   prefixes
//! - [`catalog_file`] — TOML catalog overrides for range corrections
//! - [`resolve`] — the single `resolve()` entry point and result types
//! - [`forward`] — serial number to MAC composition
//! - [`reverse`] — MAC to reconstructed Device ID via aligned-block
//!   search
//! - [`pair`] — cross-checking a MAC against a serial from one label
//! - [`report`] — terminal rendering of results and reference tables
//!
//! Resolution is a pure function of its input and the catalog: no I/O,
//! no shared mutable state, safe to call concurrently.
//!
//! ```
//! use suprema_resolve::catalog::Catalog;
//! use suprema_resolve::resolve::resolve;
//!
//! let catalog = Catalog::builtin();
//! let res = resolve(&catalog, "544426672");
//! assert_eq!(res.normalized_mac, "00:17:FC:72:4A:B0");
//! assert_eq!(res.primary.unwrap().name, "XPass");
//! ```

pub mod catalog;
pub mod catalog_file;
pub mod forward;
pub mod pair;
pub mod report;
pub mod resolve;
pub mod reverse;

pub use catalog::{Catalog, DeviceModel, Generation, MANUFACTURER_PREFIXES};
pub use catalog_file::{load_catalog, CatalogLoadError};
pub use pair::{check_pair, PairAgreement, PairMatch};
pub use resolve::{resolve, Resolution, Validity};
