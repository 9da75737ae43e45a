//! chefenv_core - data model and path helpers for the Chef Server environments API.

pub mod environment;
