//! Shared test utilities for the page controllers.
