//! siRNA/ASO efficacy scoring and candidate filtering for gene-silencing design

pub mod encode;
pub mod error;
pub mod filters;
pub mod scores;
pub mod tables;
