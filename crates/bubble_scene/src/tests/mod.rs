//! Scene-level tests that exercise several modules together
