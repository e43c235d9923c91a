#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use cr_ptr as ptr;
pub use cr_rev as rev;
pub use cr_traits as traits;
