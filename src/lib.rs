//! Cifra is a local-first blog store for a security writer's site.
//!
//! Posts live as one JSON document behind a pluggable key-value backend.
//! The [`domain`] layer holds the pure rules (slugs, read time, tags, the
//! seeded default set); [`application`] owns the post store service, its
//! storage capability, and list filtering; [`infra`] provides the storage
//! backends and telemetry; [`config`] assembles layered settings for the
//! CLI binary.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
