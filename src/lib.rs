//! Workspace-level integration tests for crosscheck live in `tests/`.
