//! Site tree conversion.
//!
//! Walks a Markdown source tree and mirrors it into an output directory of
//! standalone HTML pages, plus a fixed allow-list of root-level files.

mod converter;

pub use converter::{
    ConvertError, ConvertReport, ConvertedPage, ROOT_FILES, SiteConverter, SiteLayout,
};
