//! Workspace-level integration tests for squarepool; see `tests/`.
