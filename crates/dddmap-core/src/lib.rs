//! dddmap Core Types and Definitions
//!
//! This crate provides the foundational types shared by the dddmap parser and
//! diagram builder. It includes:
//!
//! - **Relations**: Directional entity references with multiplicity ([`relation`] module)
//! - **Tables**: Row and cell model consumed by table-based diagram renderers ([`table`] module)
//! - **Colors**: CSS color validation ([`color::Color`])

pub mod color;
pub mod relation;
pub mod table;
