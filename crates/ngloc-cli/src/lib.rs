//! ngloc-cli
//! =========
//!
//! Command-line interface for the `ngloc-core` location database.
//!
//! This crate primarily provides a binary (`ngloc`). The library target only
//! carries this overview so that docs.rs renders a page for the crate.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install ngloc-cli
//! ngloc load                     # bundled zones, states and LGAs
//! ngloc load --sample            # cities, wards and postal codes for a few LGAs
//! ngloc lgas --state lagos
//! ngloc search ikeja
//! ```
//!
//! For programmatic access, use [`ngloc-core`] directly.
//!
//! [`ngloc-core`]: https://docs.rs/ngloc-core
#![cfg_attr(docsrs, feature(doc_cfg))]
