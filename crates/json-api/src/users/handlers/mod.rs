//! User Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod patch;
pub(crate) mod search;
pub(crate) mod update;
