//! Turns tables into the forms that are handed to callers: serializable documents for
//! exchange with other programs and human readable tables for the terminal.
//!
//! Presenting never reorders or renames states. The names of states in a split Moore table
//! are exactly the labels that were assigned during the conversion.

mod document;
pub use document::{
    ConversionDocument, MealyDocument, MooreDocument, MooreSourceDocument, StateRecord, Successors,
    TransitionRecord,
};

mod table;
