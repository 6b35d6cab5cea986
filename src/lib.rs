//! # Schemaver
//!
//! An in-process schema version manager for structured records.
//!
//! Schemaver keeps a registry of numbered schema revisions, validates
//! records against any of them, upgrades records forward one revision at
//! a time, and emits the SQL that describes each structural change. The
//! library lives in `schemaver-core`; the `schemaver` binary is a small
//! admin and demonstration front end over it.
