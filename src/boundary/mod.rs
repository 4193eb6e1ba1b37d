//! This is an abstraction layer between the ledger's account model and the
//! execution engine's address model.

pub mod address;
