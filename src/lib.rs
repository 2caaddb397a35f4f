//! Workspace root package. It only carries development tooling (pre-commit
//! hooks); library code lives in `crates/footpath-lib`.
