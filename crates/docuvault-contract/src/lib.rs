#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod report;
pub mod request;

pub use crate::request::{ConstraintKind, CreateDocument, CreateDocumentRequest};
